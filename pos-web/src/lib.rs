//! Servidor web do etiquetador POS Marathi.
//!
//! Expõe o [`pos_core::PosPipeline`] por HTTP (Axum). O modelo é carregado uma
//! única vez na inicialização e compartilhado, somente leitura, entre as
//! requisições.

pub mod config;
pub mod error;
pub mod routes;

pub use config::Config;
pub use error::ApiError;
pub use routes::{router, AppState, SharedState};
