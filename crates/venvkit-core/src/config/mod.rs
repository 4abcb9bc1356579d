//! venvkit configuration layer
//!
//! Every environment variable read goes through this module; the rest of the
//! workspace consumes typed config structs instead of calling `std::env::var`.
//!
//! - `loader`: `env_or`, `env_optional`, `env_bool`, `.env` loading
//! - `schema`: `ObservabilityConfig`, `ProvisionConfig`
//! - `env_keys`: key constants

pub mod env_keys;
pub mod loader;
pub mod schema;

pub use loader::{
    env_bool, env_optional, env_or, load_dotenv, load_dotenv_from_dir, remove_env_var,
    set_env_var,
};
pub use schema::{ObservabilityConfig, ProvisionConfig};
