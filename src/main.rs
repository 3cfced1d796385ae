mod commands;

#[tokio::main]
async fn main() {
    // Launch via clap command chain
    commands::launch().await;
}
