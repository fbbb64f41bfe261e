#![warn(clippy::uninlined_format_args)]

mod bootstrap;
mod buttons;
mod handler;

#[tokio::main]
async fn main() {
    bootstrap::run().await;
}
