//! Mock endpoints of a remote menu API.
//!
//! Endpoints are registered on the context's mockito server and can be asserted to have
//! been called the expected number of times.

use mockito::Mock;

use crate::TestContext;

impl TestContext {
    pub fn menu_api(&mut self) -> MenuApiFixtures<'_> {
        MenuApiFixtures { setup: self }
    }
}

pub struct MenuApiFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> MenuApiFixtures<'a> {
    /// Create a `GET /menu/{weekday}` endpoint answering 200 with the given meal slots.
    pub fn create_menu_endpoint(
        &mut self,
        weekday: &str,
        breakfast: Option<&str>,
        lunch: Option<&str>,
        snacks: Option<&str>,
        dinner: Option<&str>,
        expected_requests: usize,
    ) -> Mock {
        let body = serde_json::json!({
            "weekday": weekday,
            "breakfast": breakfast,
            "lunch": lunch,
            "snacks": snacks,
            "dinner": dinner,
        });

        self.setup
            .server
            .mock("GET", format!("/menu/{}", weekday).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a `GET /menu/{weekday}` endpoint answering with a bare status and error body.
    pub fn create_menu_error_endpoint(
        &mut self,
        weekday: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", format!("/menu/{}", weekday).as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"mock error"}"#)
            .expect(expected_requests)
            .create()
    }
}
