#![allow(missing_docs)]

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use clap::Parser;
    use clicks::server::{ServerConfig, serve};

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    serve(ServerConfig::parse()).await
}

#[cfg(target_arch = "wasm32")]
fn main() {}
