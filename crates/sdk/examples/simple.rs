//! Simple SDK Example
//!
//! Lists models, prints the newest run of each and the log files.
//!
//! # Usage
//!
//! 1. Start the server:
//!    ```bash
//!    cargo run --package evalboard-daemon
//!    ```
//!
//! 2. Run this example:
//!    ```bash
//!    cargo run --example simple
//!    ```

use evalboard_sdk::{load_runs, DashboardClient, LoadMode};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Evalboard SDK - Simple Example");
    println!("==============================\n");

    // 1. Connect to server
    let client = DashboardClient::connect("http://localhost:5005")?;
    let health = client.health().await?;
    println!("1. Server v{} is {}\n", health.version, health.status);

    // 2. Models
    let models = client.list_models().await?;
    println!("2. {} models: {}\n", models.len(), models.join(", "));

    // 3. Newest run of each model
    println!("3. Latest runs:");
    for loaded in load_runs(&client, &models, LoadMode::Latest).await {
        println!(
            "   {} ({}): {} exchanges",
            loaded.model,
            loaded.file_name,
            loaded.run.prompt.len()
        );
    }

    // 4. Logs
    println!("\n4. Log files:");
    for name in client.list_logs().await? {
        println!("   {}", name);
    }

    Ok(())
}
