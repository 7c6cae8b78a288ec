//! # Integration Tests
//!
//! These tests start the queue advisor router on an ephemeral local port and
//! exercise it over real HTTP with `reqwest`. No external infrastructure is
//! needed.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test integration
//! ```

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    /// Serve the app on 127.0.0.1:0 and return its base URL.
    async fn spawn_app() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        tokio::spawn(async move {
            axum::serve(listener, queue_advisor::create_app())
                .await
                .expect("Server error");
        });

        format!("http://{}", addr)
    }

    fn parse_usd(value: &Value) -> f64 {
        value
            .as_str()
            .and_then(|s| s.strip_prefix('$'))
            .and_then(|s| s.parse().ok())
            .expect("Expected a $-prefixed amount")
    }

    #[tokio::test]
    async fn test_compare_microservices_workload() {
        let base_url = spawn_app().await;
        let client = reqwest::Client::new();
        let res = client
            .post(format!("{}/compare", base_url))
            .json(&json!({
                "messagesPerMonth": "5000000",
                "requireOrdering": "no",
                "messageLossTolerance": "medium",
                "replayNeeded": "no",
                "monthlyBudget": "200",
                "environment": "aws"
            }))
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(res.status(), 200, "Expected 200 OK");

        let body: Value = res.json().await.expect("Failed to parse response");
        assert_eq!(body["recommendation"], "Amazon SQS");
        assert_eq!(body["queueType"], "Standard");
        assert!(body["explanation"]
            .as_str()
            .unwrap()
            .starts_with("Recommended queue type: **Standard**"));
        assert_eq!(body["pricing"]["region"]["code"], "us-east-1");
        assert_eq!(body["bestRegion"]["region"]["code"], "us-east-1");
        assert_eq!(body["radarData"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_compare_rule_precedence() {
        let base_url = spawn_app().await;
        let client = reqwest::Client::new();
        let res = client
            .post(format!("{}/compare", base_url))
            .json(&json!({
                "messagesPerMonth": "60000000",
                "requireOrdering": "yes",
                "replayNeeded": "yes",
                "messageLossTolerance": "low",
                "environment": "aws",
                "monthlyBudget": "1000"
            }))
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(res.status(), 200);
        let body: Value = res.json().await.expect("Failed to parse response");
        assert_eq!(body["recommendation"], "Apache Kafka (MSK)");
        assert_eq!(body["matchedRule"], "replay_at_scale");
        assert!(body["explanation"]
            .as_str()
            .unwrap()
            .contains("event sourcing"));
        assert!(body.get("queueType").is_none());
    }

    #[tokio::test]
    async fn test_compare_prices_requested_region() {
        let base_url = spawn_app().await;
        let client = reqwest::Client::new();

        let mut tiers = Vec::new();
        for region in ["us-east-1", "sa-east-1"] {
            let res = client
                .post(format!("{}/compare", base_url))
                .json(&json!({ "messagesPerMonth": "1000000", "region": region }))
                .send()
                .await
                .expect("Failed to send request");
            assert_eq!(res.status(), 200);
            let body: Value = res.json().await.expect("Failed to parse response");
            assert_eq!(body["pricing"]["region"]["code"], region);
            tiers.push(body["pricing"].clone());
        }

        for tier in ["1M", "10M", "100M"] {
            let base = parse_usd(&tiers[0]["kafka"][tier]);
            let sa = parse_usd(&tiers[1]["kafka"][tier]);
            assert!((sa - 1.5 * base).abs() <= 0.02, "{tier}: {sa} vs {base}");
        }
    }

    #[tokio::test]
    async fn test_compare_unknown_region_is_bad_request() {
        let base_url = spawn_app().await;
        let client = reqwest::Client::new();
        let res = client
            .post(format!("{}/compare", base_url))
            .json(&json!({ "messagesPerMonth": "1000", "region": "moon-base-1" }))
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(res.status(), 400, "Expected 400 Bad Request");
        let body: Value = res.json().await.expect("Failed to parse response");
        assert_eq!(body["error"], "Unknown region: moon-base-1");
    }

    #[tokio::test]
    async fn test_compare_malformed_body_is_server_error() {
        let base_url = spawn_app().await;
        let client = reqwest::Client::new();
        let res = client
            .post(format!("{}/compare", base_url))
            .header("content-type", "application/json")
            .body("{\"messagesPerMonth\": ")
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(res.status(), 500, "Expected 500 Internal Server Error");
        let body: Value = res.json().await.expect("Failed to parse response");
        assert_eq!(body["error"], "Failed to process comparison");
        assert!(body.get("recommendation").is_none());
        assert!(body.get("pricing").is_none());
    }

    #[tokio::test]
    async fn test_list_regions() {
        let base_url = spawn_app().await;
        let res = reqwest::get(format!("{}/regions", base_url))
            .await
            .expect("Failed to send request");

        assert_eq!(res.status(), 200);
        let body: Value = res.json().await.expect("Failed to parse response");
        let codes: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["code"].as_str().unwrap())
            .collect();
        assert_eq!(
            codes,
            [
                "us-east-1",
                "us-east-2",
                "us-west-1",
                "us-west-2",
                "eu-west-1",
                "eu-central-1",
                "ap-southeast-1",
                "ap-northeast-1",
                "sa-east-1"
            ]
        );
    }

    #[tokio::test]
    async fn test_presets_round_trip_through_compare() {
        let base_url = spawn_app().await;
        let client = reqwest::Client::new();
        let presets: Value = client
            .get(format!("{}/presets", base_url))
            .send()
            .await
            .expect("Failed to send request")
            .json()
            .await
            .expect("Failed to parse response");

        let high_throughput = &presets["highThroughput"];
        assert_eq!(high_throughput["messagesPerMonth"], "100000000");

        let res = client
            .post(format!("{}/compare", base_url))
            .json(high_throughput)
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(res.status(), 200);
        let body: Value = res.json().await.expect("Failed to parse response");
        assert_eq!(body["recommendation"], "Apache Kafka (MSK)");
    }
}
