use anyhow::Result;
use enerlab_http::{bind_addr_from_env, init_tracing, serve};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let addr = bind_addr_from_env("ENERLAB_COMBUSTION_ADDR");
    serve(enerlab_combustion::app(), &addr).await
}
