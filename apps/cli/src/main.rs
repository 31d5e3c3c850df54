#[tokio::main]
async fn main() -> anyhow::Result<()> {
    longman_anki::run().await
}
