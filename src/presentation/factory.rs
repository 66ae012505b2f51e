//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up from the
//! resolved [`Config`].

use crate::application::{CompileOptions, CompileUseCase};
use crate::config::Config;
use crate::error::BlueprintResult;
use crate::infrastructure::HttpKeySource;

/// Compile use case backed by the HTTP key service
pub type ConcreteCompileUseCase = CompileUseCase<HttpKeySource>;

/// Create a compile use case with all dependencies wired up
pub fn create_compile_use_case(config: &Config) -> BlueprintResult<ConcreteCompileUseCase> {
    let keys = HttpKeySource::from_config(&config.keys)?;
    Ok(CompileUseCase::new(keys))
}

/// Compile options carrying the configured policy defaults
pub fn compile_options(config: &Config) -> CompileOptions {
    CompileOptions::new(config.deployment_options())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_options_use_config_defaults() {
        let mut config = Config::default();
        config.deployment.namespace = "ci".to_string();
        config.deployment.max_price = 0.25;

        let options = compile_options(&config);
        assert_eq!(options.deployment.namespace, "ci");
        assert_eq!(options.deployment.max_price, 0.25);
    }

    #[test]
    fn test_create_compile_use_case_from_defaults() {
        let use_case = create_compile_use_case(&Config::default()).unwrap();
        assert_eq!(use_case.context().unique_service_name("web"), "web");
    }
}
