use opencga_client::prelude::*;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("🧬 OpenCGA Study Overview");
    println!("=========================");

    let host = env::var("OPENCGA_HOST").unwrap_or_else(|_| "http://localhost:8080/opencga".to_string());
    let study = env::var("OPENCGA_STUDY").unwrap_or_else(|_| "demo@family:platinum".to_string());
    let config = ClientConfig::new(host);

    // Anonymous access only sees public studies
    let client = match env::var("OPENCGA_TOKEN") {
        Ok(token) if !token.trim().is_empty() => OpencgaClient::from_config(config, BearerAuth::new(token))?,
        _ => {
            println!("⚠️  OPENCGA_TOKEN not set, connecting anonymously");
            OpencgaClient::from_config(config, NoAuth)?
        }
    };
    println!("🔗 REST root: {}", client.base_url());

    // 1. Study info
    println!("\n1. 📂 Fetching study {}...", study);
    match client.studies().info(&study, QueryOptions::new()).await {
        Ok(response) => {
            if let Some(info) = response.first_result() {
                println!("   ✅ Study accessible");
                println!("   📋 Name: {}", info["name"].as_str().unwrap_or("unknown"));
            }
        }
        Err(e) => {
            println!("   ❌ Cannot access study: {}", e);
            return Err(e.into());
        }
    }

    // 2. Cohorts of the study
    println!("\n2. 👥 Listing cohorts...");
    let cohorts = client
        .cohorts()
        .search(QueryOptions::new().set("study", &study).set("include", "id,samples"))
        .await?;
    for cohort in cohorts.all_results() {
        let samples = cohort["samples"].as_array().map(Vec::len).unwrap_or(0);
        println!("   📋 {} ({} samples)", cohort["id"].as_str().unwrap_or("?"), samples);
    }

    // 3. A few variants in a region
    println!("\n3. 🔍 Querying variants in 22:16000000-17000000...");
    let options = QueryOptions::new()
        .set("study", &study)
        .set("region", "22:16000000-17000000")
        .set("limit", 5);
    match client.variants().query(options).await {
        Ok(response) => {
            println!("   ✅ {} variants returned", response.all_results_size());
            for variant in response.all_results() {
                println!("   📋 {}", variant["id"].as_str().unwrap_or("?"));
            }
        }
        Err(OpencgaError::PermissionDenied(message)) => {
            println!("   ⚠️  Variant storage not readable: {}", message);
        }
        Err(e) => return Err(e.into()),
    }

    println!("\n🎉 Done");
    Ok(())
}
