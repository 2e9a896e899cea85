//! Static payload text for the liveness and greeting endpoints.

/// Product name reported by the liveness endpoint.
pub const SERVICE_NAME: &str = "Vionix";

/// Returns the liveness message.
pub fn status_message() -> String {
    format!("{SERVICE_NAME} backend is running")
}

/// Returns the greeting served by `GET /api/hello`.
pub fn hello_world() -> String {
    format!("Hello from the {SERVICE_NAME} backend API!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_world_names_the_service() {
        assert_eq!(hello_world(), "Hello from the Vionix backend API!");
    }

    #[test]
    fn status_message_names_the_service() {
        assert_eq!(status_message(), "Vionix backend is running");
    }
}
