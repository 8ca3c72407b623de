use repo_mover::{cli, pipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = cli::run()?;

    pipeline::call(config).await
}
