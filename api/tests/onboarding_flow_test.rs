//! End-to-end tests of the onboarding HTTP surface, backed by the
//! in-memory repositories and the recording mail sender.

use actix_web::{test, web};
use std::sync::Arc;

use ob_api::app::create_app;
use ob_api::pages::PageContext;
use ob_api::routes::AppState;

use ob_core::domain::entities::dealer::Country;
use ob_core::domain::entities::inventory::InventorySeller;
use ob_core::domain::entities::lender::Lender;
use ob_core::repositories::{
    MockAgentRepository, MockDealerGroupRepository, MockDealerRepository,
    MockInventoryRepository, MockLenderRepository,
};
use ob_core::services::notification::MockEmailSender;
use ob_core::services::search::SearchService;
use ob_core::services::signup::SignupService;
use ob_core::services::verification::{VerificationConfig, VerificationService};
use ob_shared::config::OnboardingConfig;

type TestState = AppState<
    MockDealerRepository,
    MockDealerGroupRepository,
    MockAgentRepository,
    MockInventoryRepository,
    MockLenderRepository,
    MockEmailSender,
>;

struct Fixture {
    state: web::Data<TestState>,
    inventory: Arc<MockInventoryRepository>,
    lenders: Arc<MockLenderRepository>,
    mailer: Arc<MockEmailSender>,
}

fn fixture() -> Fixture {
    let dealers = Arc::new(MockDealerRepository::new());
    let groups = Arc::new(MockDealerGroupRepository::new());
    let agents = Arc::new(MockAgentRepository::new());
    let inventory = Arc::new(MockInventoryRepository::new());
    let lenders = Arc::new(MockLenderRepository::new());
    let mailer = Arc::new(MockEmailSender::new());

    let config = OnboardingConfig::default();
    let verification = Arc::new(VerificationService::new(
        dealers.clone(),
        mailer.clone(),
        VerificationConfig {
            base_url: config.base_url.clone(),
        },
    ));
    let signup = Arc::new(SignupService::new(
        dealers.clone(),
        groups.clone(),
        agents,
        inventory.clone(),
        verification.clone(),
    ));
    let search = Arc::new(SearchService::new(
        lenders.clone(),
        groups,
        inventory.clone(),
        dealers,
    ));

    let state = web::Data::new(AppState {
        signup,
        verification,
        search,
        pages: PageContext::new(&config),
    });

    Fixture {
        state,
        inventory,
        lenders,
        mailer,
    }
}

fn dealer_body() -> serde_json::Value {
    serde_json::json!({
        "dealership_name": "Main Street Motors",
        "dealership_phone": "(780) 555-0100",
        "dealership_lead_email": "leads@mainstreetmotors.com",
        "dealership_billing_email": "billing@mainstreetmotors.com",
        "dealership_website": "https://www.mainstreetmotors.com",
        "dealership_country": "CA",
        "contact_full_name": "Sam Carter",
        "contact_email": "sam@mainstreetmotors.com",
        "contact_phone": "780-555-0101"
    })
}

async fn seed_inventory(fixture: &Fixture) {
    fixture
        .inventory
        .put(
            Country::Ca,
            InventorySeller::new("Main Street Motors", "mainstreetmotors.com"),
        )
        .await;
}

/// Pull the `data` query param out of a link captured by the mock mailer
fn link_data(url: &str) -> String {
    url.split_once("data=").expect("link carries data param").1.to_string()
}

#[actix_rt::test]
async fn test_signup_and_verify_flow() {
    let fixture = fixture();
    seed_inventory(&fixture).await;
    let app = test::init_service(create_app(fixture.state.clone())).await;

    // Sign up
    let request = test::TestRequest::post()
        .uri("/new-dealer")
        .set_json(dealer_body())
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["data"]["message"], "Success");

    let sent = fixture.mailer.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "sam@mainstreetmotors.com");

    // Click the emailed verify link
    let data = link_data(&sent[0].verify_url);
    let request = test::TestRequest::get()
        .uri(&format!("/verify-email?data={data}"))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 200);
    let body = test::read_body(response).await;
    let page = String::from_utf8(body.to_vec()).unwrap();
    assert!(page.contains("Your email has been verified"));
    // CA dealership gets the CA checkout URL with the billing email prefilled
    assert!(page.contains("https://checkout.example.com/ca?prefilled_email=billing@mainstreetmotors.com"));

    // Clicking the same link again hits the already-verified page
    let request = test::TestRequest::get()
        .uri(&format!("/verify-email?data={data}"))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 400);
    let body = test::read_body(response).await;
    let page = String::from_utf8(body.to_vec()).unwrap();
    assert!(page.contains("already verified"));
}

#[actix_rt::test]
async fn test_signup_rejects_domain_mismatch() {
    let fixture = fixture();
    seed_inventory(&fixture).await;
    let app = test::init_service(create_app(fixture.state.clone())).await;

    let mut body = dealer_body();
    body["contact_email"] = serde_json::json!("sam@gmail.com");
    let request = test::TestRequest::post()
        .uri("/new-dealer")
        .set_json(body)
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 400);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(
        body["data"]["message"],
        "Email and website domains must match. (mainstreetmotors.com, gmail.com)"
    );
    assert_eq!(fixture.mailer.sent_count().await, 0);
}

#[actix_rt::test]
async fn test_signup_validation_failure_names_fields() {
    let fixture = fixture();
    seed_inventory(&fixture).await;
    let app = test::init_service(create_app(fixture.state.clone())).await;

    let mut body = dealer_body();
    body["contact_email"] = serde_json::json!("not-an-email");
    body["dealership_country"] = serde_json::json!("UK");
    let request = test::TestRequest::post()
        .uri("/new-dealer")
        .set_json(body)
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 400);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["data"]["message"], "Field validation failed.");
    let fields = body["data"]["fields"].as_array().unwrap();
    assert!(fields.contains(&serde_json::json!("contact_email")));
    assert!(fields.contains(&serde_json::json!("dealership_country")));
}

#[actix_rt::test]
async fn test_resend_invalidates_old_link() {
    let fixture = fixture();
    seed_inventory(&fixture).await;
    let app = test::init_service(create_app(fixture.state.clone())).await;

    let request = test::TestRequest::post()
        .uri("/new-dealer")
        .set_json(dealer_body())
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 200);

    let first_email = fixture.mailer.sent().await[0].clone();

    // Resend issues a replacement token
    let resend_data = link_data(&first_email.resend_url);
    let request = test::TestRequest::get()
        .uri(&format!("/resend-verification-email?data={resend_data}"))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 200);
    let sent = fixture.mailer.sent().await;
    assert_eq!(sent.len(), 2);

    // Old link is dead
    let old_data = link_data(&first_email.verify_url);
    let request = test::TestRequest::get()
        .uri(&format!("/verify-email?data={old_data}"))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 400);

    // New link verifies
    let new_data = link_data(&sent[1].verify_url);
    let request = test::TestRequest::get()
        .uri(&format!("/verify-email?data={new_data}"))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 200);
}

#[actix_rt::test]
async fn test_resend_for_unknown_email() {
    let fixture = fixture();
    let app = test::init_service(create_app(fixture.state.clone())).await;

    let data = fixture
        .state
        .verification
        .resend_url("nobody@nowhere.com")
        .unwrap();
    let data = link_data(&data);
    let request = test::TestRequest::get()
        .uri(&format!("/resend-verification-email?data={data}"))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 404);
}

#[actix_rt::test]
async fn test_verify_with_garbage_data() {
    let fixture = fixture();
    let app = test::init_service(create_app(fixture.state.clone())).await;

    let request = test::TestRequest::get()
        .uri("/verify-email?data=%25%25garbage")
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 400);
    let body = test::read_body(response).await;
    let page = String::from_utf8(body.to_vec()).unwrap();
    assert!(page.contains("badly formed link"));

    // Missing data param entirely
    let request = test::TestRequest::get().uri("/verify-email").to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 400);
}

#[actix_rt::test]
async fn test_new_dealer_group_and_duplicate() {
    let fixture = fixture();
    let app = test::init_service(create_app(fixture.state.clone())).await;

    let body = serde_json::json!({
        "dealer_group_name": "Prairie Auto Group",
        "dealer_group_website": "https://www.prairieauto.ca"
    });
    let request = test::TestRequest::post()
        .uri("/new-dealer-group")
        .set_json(&body)
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 200);

    // Same domain again
    let request = test::TestRequest::post()
        .uri("/new-dealer-group")
        .set_json(&body)
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 400);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(
        body["data"]["message"],
        "Dealer group domain already exists in system."
    );
}

#[actix_rt::test]
async fn test_search_endpoints() {
    let fixture = fixture();
    fixture.lenders.put(Lender::new("NB", "Northern Bank")).await;
    fixture
        .inventory
        .put(
            Country::Us,
            InventorySeller::new("Alpha Autos", "alphaautos.com"),
        )
        .await;
    let app = test::init_service(create_app(fixture.state.clone())).await;

    let request = test::TestRequest::get()
        .uri("/search-lenders?query=north")
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body[0]["name"], "Northern Bank");

    let request = test::TestRequest::get()
        .uri("/search-dealers?query=alpha&country=US")
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body[0]["name"], "Alpha Autos");
    assert_eq!(body[0]["onboarded"], false);

    // Country is required for dealer search
    let request = test::TestRequest::get()
        .uri("/search-dealers?query=alpha")
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 400);

    // Query is required
    let request = test::TestRequest::get()
        .uri("/search-lenders?query=")
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 400);
}

#[actix_rt::test]
async fn test_health_and_not_found() {
    let fixture = fixture();
    let app = test::init_service(create_app(fixture.state.clone())).await;

    let request = test::TestRequest::get().uri("/health").to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 200);

    let request = test::TestRequest::get().uri("/no-such-route").to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 404);
}
