#[tokio::main]
async fn main() {
    synergy_backend::run().await;
}
