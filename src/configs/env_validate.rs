/// Read `name` from the environment, falling back to `default` when it is
/// unset or blank.
pub fn env_or_default(name: &str, default: &str) -> String {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => {
            log::info!("Using {} from environment: {}", name, value);
            value
        }
        _ => {
            log::info!("{} not set, using default: {}", name, default);
            default.to_string()
        }
    }
}
