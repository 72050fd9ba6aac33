//! Route handlers for the onboarding endpoints.

pub mod dealers;
pub mod groups;
pub mod search;
pub mod verification;

use std::sync::Arc;

use ob_core::repositories::{
    AgentRepository, DealerGroupRepository, DealerRepository, InventoryRepository,
    LenderRepository,
};
use ob_core::services::notification::EmailSender;
use ob_core::services::search::SearchService;
use ob_core::services::signup::SignupService;
use ob_core::services::verification::VerificationService;

use crate::pages::PageContext;

/// Shared services injected into every handler
pub struct AppState<D, G, A, I, L, M>
where
    D: DealerRepository,
    G: DealerGroupRepository,
    A: AgentRepository,
    I: InventoryRepository,
    L: LenderRepository,
    M: EmailSender,
{
    pub signup: Arc<SignupService<D, G, A, I, M>>,
    pub verification: Arc<VerificationService<D, M>>,
    pub search: Arc<SearchService<L, G, I, D>>,
    pub pages: PageContext,
}
