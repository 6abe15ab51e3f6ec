//! Console walkthroughs of every pattern.
//!
//! Each `run_*` function exercises one module and writes what happens to a
//! [`MessageSink`]. The `pattern-demo` binary drives them through
//! [`Pattern::run`].

use thiserror::Error;

use crate::adapter::{Gateway, PaymentProcessor};
use crate::bridge::{MessageSender, Notification};
use crate::builder::HttpRequest;
use crate::error::ValidationError;
use crate::factory::{PaymentError, PaymentFactory};
use crate::output::MessageSink;
use crate::prototype::{Document, SpreadsheetDocument, TextDocument};
use crate::singleton::{Config, ConfigurationManager, DatabaseConnectionPool};

/// Failure of a demo run.
#[derive(Debug, Error)]
pub enum DemoError {
    /// A record failed validation.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A payment could not be created.
    #[error("payment failed: {0}")]
    Payment(#[from] PaymentError),
}

/// Selectable demo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Pattern {
    /// Payment gateway adapters
    Adapter,
    /// Notifications bridged to delivery channels
    Bridge,
    /// HTTP request builder
    Builder,
    /// Payment factory
    Factory,
    /// Document prototypes
    Prototype,
    /// Connection pool and configuration singletons
    Singleton,
}

impl Pattern {
    /// Every demo, in presentation order.
    pub const ALL: [Self; 6] = [
        Self::Singleton,
        Self::Factory,
        Self::Builder,
        Self::Prototype,
        Self::Adapter,
        Self::Bridge,
    ];

    /// Runs this demo; the singleton demo uses the process-wide instances
    /// and announces the pool only on the run that creates it.
    ///
    /// # Errors
    ///
    /// Returns [`DemoError`] if a record or payment the demo constructs is
    /// rejected.
    pub fn run(self, sink: &dyn MessageSink) -> Result<(), DemoError> {
        tracing::debug!(pattern = ?self, "running demo");
        match self {
            Self::Adapter => {
                run_adapter(sink);
                Ok(())
            }
            Self::Bridge => {
                run_bridge(sink);
                Ok(())
            }
            Self::Builder => run_builder(sink),
            Self::Factory => run_factory(sink),
            Self::Prototype => {
                run_prototype(sink);
                Ok(())
            }
            Self::Singleton => {
                run_singleton(
                    DatabaseConnectionPool::get_or_initialize(sink),
                    ConfigurationManager::global(),
                    sink,
                );
                Ok(())
            }
        }
    }
}

/// Runs every demo in [`Pattern::ALL`] order, stopping at the first failure.
///
/// # Errors
///
/// Propagates the first [`DemoError`].
pub fn run_all(sink: &dyn MessageSink) -> Result<(), DemoError> {
    Pattern::ALL.into_iter().try_for_each(|pattern| pattern.run(sink))
}

/// Builds one fully specified request.
///
/// # Errors
///
/// Returns [`DemoError::Validation`] if the request is rejected.
pub fn run_builder(sink: &dyn MessageSink) -> Result<(), DemoError> {
    let request = HttpRequest::builder()
        .url("https://api.example.com/users")
        .method("POST")
        .header("Content-Type", "application/json")
        .header("Authorization", "Bearer token123")
        .body("{\"name\": \"John Doe\", \"email\": \"john@example.com\"}")
        .timeout(60)
        .build()?;

    sink.emit(&format!("Request URL: {request}"));

    let rejected = HttpRequest::builder().url("https://x").timeout(-1).build();
    if let Err(error) = rejected {
        sink.emit(&format!("Rejected request: {error}"));
    }
    Ok(())
}

/// Creates and processes one payment of each kind, then an unknown kind.
///
/// # Errors
///
/// Returns [`DemoError::Payment`] if a known kind is rejected.
pub fn run_factory(sink: &dyn MessageSink) -> Result<(), DemoError> {
    let payments = [
        (PaymentFactory::create("credit_card", &["4111111111111111", "123"])?, 100.00),
        (PaymentFactory::create("upi", &["user@bank"])?, 250.50),
        (PaymentFactory::create("netbanking", &["12345678", "IFSC0001"])?, 500.25),
    ];
    for (payment, amount) in &payments {
        sink.emit(&PaymentFactory::process_payment(payment, *amount, sink));
    }

    match PaymentFactory::create("cash", &[]) {
        Ok(payment) => sink.emit(&PaymentFactory::process_payment(&payment, 50.0, sink)),
        Err(error) => sink.emit(&format!("Expected error for unknown type: {error}")),
    }
    Ok(())
}

/// Shows that constructors copy their inputs and clones are independent.
pub fn run_prototype(sink: &dyn MessageSink) {
    let mut initial_tags = vec!["draft".to_string(), "2026".to_string()];
    let original = TextDocument::new("Report", "Initial content", "Alice", &initial_tags);
    sink.emit(&format!("Original Text: {original}"));

    let cloned = Document::from(original.clone()).prototype();
    sink.emit(&format!("Cloned Text:   {cloned}"));

    initial_tags.push("modified-external-list".to_string());
    sink.emit(&format!("External initialTags modified: {initial_tags:?}"));
    sink.emit(&format!(
        "Original Text tags after external modification: {:?}",
        original.tags()
    ));
    if let Document::Text(cloned_text) = &cloned {
        sink.emit(&format!(
            "Cloned Text tags after external modification:   {:?}",
            cloned_text.tags()
        ));
    }

    let updated = original.with_content("Updated content".to_string());
    sink.emit(&format!("Updated Text (withContent): {updated}"));
    sink.emit(&format!(
        "original == cloned: {}",
        Document::from(original) == cloned
    ));

    let mut table = vec![
        vec!["A1".to_string(), "B1".to_string(), "C1".to_string()],
        vec!["A2".to_string(), "B2".to_string(), "C2".to_string()],
    ];
    let sheet = SpreadsheetDocument::new("Sheet1", &table, 2, 3);
    sink.emit(&format!("Original Sheet content: {}", sheet.content()));

    let sheet_clone = sheet.clone();
    sink.emit(&format!("Cloned Sheet content:   {}", sheet_clone.content()));

    table[0][0] = "A1-modified".to_string();
    sink.emit(&format!("External table after modification: {table:?}"));
    sink.emit(&format!(
        "Original Sheet content after external change: {}",
        sheet.content()
    ));
    sink.emit(&format!(
        "Cloned Sheet content after external change:   {}",
        sheet_clone.content()
    ));
    sink.emit("Demo complete.");
}

/// Routes payments through each gateway adapter.
pub fn run_adapter(sink: &dyn MessageSink) {
    sink.emit("=== AdapterPattern Demo ===");

    let stripe = Gateway::stripe();
    PaymentProcessor::process(&stripe, 10.50, sink);
    PaymentProcessor::process(&Gateway::paypal(), 20.00, sink);
    PaymentProcessor::process(&Gateway::razorpay(), 500.00, sink);

    let result = stripe.process_payment(15.75, "USD", sink);
    sink.emit(&format!(
        "Direct call - success: {}, id: {}, msg: {}",
        result.success, result.transaction_id, result.message
    ));
}

/// Sends notifications of both kinds over different channels.
pub fn run_bridge(sink: &dyn MessageSink) {
    sink.emit("=== BridgePattern Demo ===");

    Notification::Urgent(MessageSender::Email).notify("Server is down!", "ops@example.com", sink);
    Notification::Regular(MessageSender::Sms).notify("Daily report is ready.", "+1234567890", sink);
    Notification::Urgent(MessageSender::Push).notify(
        "You have a critical alert.",
        "user-device-token",
        sink,
    );

    sink.emit("BridgePattern demo finished.");
}

/// Uses the given pool and configuration manager, then rotates the API key.
pub fn run_singleton(
    pool: &DatabaseConnectionPool,
    manager: &ConfigurationManager,
    sink: &dyn MessageSink,
) {
    sink.emit(&format!("Max connections: {}", pool.max_connections()));
    sink.emit(&format!("Acquired: {}", pool.acquire_connection()));

    let config = manager.config();
    sink.emit(&format!("API Key (before): {}", config.api_key()));

    let rotated: Config = config.with_api_key("api-key-456".to_string());
    manager.update_config(rotated);
    sink.emit(&format!("API Key (after): {}", manager.config().api_key()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::RecordingSink;
    use rstest::rstest;

    #[rstest]
    fn test_builder_demo() {
        let sink = RecordingSink::new();

        run_builder(&sink).unwrap();

        let lines = sink.lines();
        assert!(lines[0].starts_with("Request URL: HttpRequest[url=https://api.example.com/users, method=POST"));
        assert_eq!(
            lines[1],
            "Rejected request: timeout: value -1 is out of range (must be at least 0)"
        );
    }

    #[rstest]
    fn test_factory_demo() {
        let sink = RecordingSink::new();

        run_factory(&sink).unwrap();

        assert!(sink.contains("Credit card processed: 4111111111111111"));
        assert!(sink.contains("UPI processed: user@bank"));
        assert!(sink.contains("Net banking processed: 12345678"));
        assert!(sink.contains("Expected error for unknown type: Unknown payment type: cash"));
    }

    #[rstest]
    fn test_prototype_demo_shows_independent_copies() {
        let sink = RecordingSink::new();

        run_prototype(&sink);

        assert!(sink.contains("Original Text tags after external modification: [\"draft\", \"2026\"]"));
        assert!(sink.contains("Cloned Text tags after external modification:   [\"draft\", \"2026\"]"));
        assert!(sink.contains("original == cloned: true"));
        assert!(sink.contains("Original Sheet content after external change: [[A1, B1, C1], [A2, B2, C2]]"));
        assert_eq!(sink.lines().last().map(String::as_str), Some("Demo complete."));
    }

    #[rstest]
    fn test_adapter_demo() {
        let sink = RecordingSink::new();

        run_adapter(&sink);

        assert!(sink.contains("Result: Stripe payment successful"));
        assert!(sink.contains("Result: PayPal payment COMPLETED"));
        assert!(sink.contains("Result: Razorpay order created"));
        assert!(sink.contains("Direct call - success: true, id: stripe_"));
    }

    #[rstest]
    fn test_bridge_demo() {
        let sink = RecordingSink::new();

        run_bridge(&sink);

        assert_eq!(sink.lines().len(), 8);
        assert!(sink.contains("Email to ops@example.com: ⚠️ Server is down!"));
    }

    #[rstest]
    fn test_singleton_demo_with_injected_instances() {
        let sink = RecordingSink::new();
        let pool = DatabaseConnectionPool::initialize(&sink);
        let manager = ConfigurationManager::default();

        run_singleton(&pool, &manager, &sink);

        assert_eq!(
            sink.lines(),
            vec![
                "Database pool initialized",
                "Max connections: 10",
                "Acquired: conn-1",
                "API Key (before): api-key-123",
                "API Key (after): api-key-456",
            ]
        );
        assert_eq!(manager.config().api_key(), "api-key-456");
    }
}
