//! Adapter pattern: three payment gateway SDKs behind one interface.
//!
//! Each SDK ("adaptee") exposes an incompatible API: Stripe charges integer
//! cents, PayPal takes stringly amounts and answers with a status, Razorpay
//! takes and returns loosely typed JSON objects. The adapters translate a
//! uniform `process_payment(amount, currency)` call into each SDK's shape
//! and normalise the answer into a [`PaymentResult`].

use serde_json::{Map, Value, json};
use uuid::Uuid;

use crate::output::MessageSink;

/// Uniform outcome of a gateway call.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaymentResult {
    /// Whether the gateway accepted the payment
    pub success: bool,
    /// Gateway-specific transaction or order id
    pub transaction_id: String,
    /// Human readable summary
    pub message: String,
}

impl PaymentResult {
    fn new(success: bool, transaction_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success,
            transaction_id: transaction_id.into(),
            message: message.into(),
        }
    }
}

// =============================================================================
// Adaptees
// =============================================================================

/// Stripe-style SDK: charges an integer amount of cents.
#[derive(Clone, Copy, Debug, Default)]
pub struct StripeApi;

impl StripeApi {
    /// Charges `amount_in_cents` and returns a `stripe_<uuid>` charge id.
    pub fn charge(self, amount_in_cents: i64, currency: &str, sink: &dyn MessageSink) -> String {
        sink.emit(&format!("Stripe: Charging {amount_in_cents} cents"));
        tracing::debug!(amount_in_cents, currency, "stripe charge");
        format!("stripe_{}", Uuid::new_v4())
    }
}

/// Response of [`PayPalApi::make_payment`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayPalResponse {
    /// Payment id
    pub id: String,
    /// Payment status, `COMPLETED` on success
    pub status: String,
}

/// PayPal-style SDK: amounts travel as strings.
#[derive(Clone, Copy, Debug, Default)]
pub struct PayPalApi;

impl PayPalApi {
    /// Status reported for a successful payment.
    pub const COMPLETED: &'static str = "COMPLETED";

    /// Makes a payment of `amount` in `currency`.
    pub fn make_payment(self, amount: &str, currency: &str, sink: &dyn MessageSink) -> PayPalResponse {
        sink.emit(&format!("PayPal: Processing {amount} {currency}"));
        PayPalResponse {
            id: format!("pp_{}", Uuid::new_v4()),
            status: Self::COMPLETED.to_string(),
        }
    }
}

/// Razorpay-style SDK: loosely typed request and response objects.
#[derive(Clone, Copy, Debug, Default)]
pub struct RazorpayApi;

impl RazorpayApi {
    /// Creates an order from `params` and returns `{"id": "rzp_<uuid>", "status": "created"}`.
    pub fn create_order(self, params: &Map<String, Value>, sink: &dyn MessageSink) -> Map<String, Value> {
        sink.emit(&format!("Razorpay: Creating order {}", Value::Object(params.clone())));
        let mut order = Map::new();
        order.insert("id".to_string(), json!(format!("rzp_{}", Uuid::new_v4())));
        order.insert("status".to_string(), json!("created"));
        order
    }
}

// =============================================================================
// Adapters
// =============================================================================

/// Adapts [`StripeApi`].
#[derive(Clone, Copy, Debug, Default)]
pub struct StripeAdapter {
    stripe: StripeApi,
}

impl StripeAdapter {
    /// Converts `amount` to cents (truncating) and charges it.
    pub fn process_payment(&self, amount: f64, currency: &str, sink: &dyn MessageSink) -> PaymentResult {
        #[allow(clippy::cast_possible_truncation)]
        let cents = (amount * 100.0) as i64;
        let transaction_id = self.stripe.charge(cents, currency, sink);
        PaymentResult::new(true, transaction_id, "Stripe payment successful")
    }
}

/// Adapts [`PayPalApi`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PayPalAdapter {
    paypal: PayPalApi,
}

impl PayPalAdapter {
    /// Sends `amount` as a string; success iff PayPal reports `COMPLETED`.
    pub fn process_payment(&self, amount: f64, currency: &str, sink: &dyn MessageSink) -> PaymentResult {
        let response = self
            .paypal
            .make_payment(&format!("{amount:?}"), currency, sink);
        let success = response.status == PayPalApi::COMPLETED;
        let message = format!("PayPal payment {}", response.status);
        PaymentResult::new(success, response.id, message)
    }
}

/// Adapts [`RazorpayApi`].
#[derive(Clone, Copy, Debug, Default)]
pub struct RazorpayAdapter {
    razorpay: RazorpayApi,
}

impl RazorpayAdapter {
    /// Creates an order for `amount` and reports its id.
    pub fn process_payment(&self, amount: f64, currency: &str, sink: &dyn MessageSink) -> PaymentResult {
        let mut params = Map::new();
        params.insert("amount".to_string(), json!(amount));
        params.insert("currency".to_string(), json!(currency));

        let order = self.razorpay.create_order(&params, sink);
        let order_id = order
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default();
        PaymentResult::new(true, order_id, "Razorpay order created")
    }
}

/// Closed set of supported gateways.
#[derive(Clone, Copy, Debug)]
pub enum Gateway {
    /// Stripe
    Stripe(StripeAdapter),
    /// PayPal
    PayPal(PayPalAdapter),
    /// Razorpay
    Razorpay(RazorpayAdapter),
}

impl Gateway {
    /// Stripe gateway.
    #[must_use]
    pub fn stripe() -> Self {
        Self::Stripe(StripeAdapter::default())
    }

    /// PayPal gateway.
    #[must_use]
    pub fn paypal() -> Self {
        Self::PayPal(PayPalAdapter::default())
    }

    /// Razorpay gateway.
    #[must_use]
    pub fn razorpay() -> Self {
        Self::Razorpay(RazorpayAdapter::default())
    }

    /// Routes the call to the wrapped adapter.
    pub fn process_payment(&self, amount: f64, currency: &str, sink: &dyn MessageSink) -> PaymentResult {
        match self {
            Self::Stripe(adapter) => adapter.process_payment(amount, currency, sink),
            Self::PayPal(adapter) => adapter.process_payment(amount, currency, sink),
            Self::Razorpay(adapter) => adapter.process_payment(amount, currency, sink),
        }
    }

    /// Settlement currency used by [`PaymentProcessor`].
    #[must_use]
    pub const fn default_currency(&self) -> &'static str {
        match self {
            Self::Stripe(_) | Self::PayPal(_) => "USD",
            Self::Razorpay(_) => "INR",
        }
    }
}

/// Processes payments through any [`Gateway`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PaymentProcessor;

impl PaymentProcessor {
    /// Charges `amount` in the gateway's settlement currency and reports the result.
    pub fn process(gateway: &Gateway, amount: f64, sink: &dyn MessageSink) -> PaymentResult {
        let result = gateway.process_payment(amount, gateway.default_currency(), sink);
        sink.emit(&format!("Result: {}", result.message));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::RecordingSink;
    use rstest::rstest;

    #[rstest]
    fn test_razorpay_prints_order_params_as_json() {
        let sink = RecordingSink::new();

        Gateway::razorpay().process_payment(500.0, "INR", &sink);

        assert_eq!(
            sink.lines(),
            vec![r#"Razorpay: Creating order {"amount":500.0,"currency":"INR"}"#]
        );
    }

    #[rstest]
    fn test_stripe_converts_to_cents() {
        let sink = RecordingSink::new();

        let result = Gateway::stripe().process_payment(10.50, "USD", &sink);

        assert!(result.success);
        assert!(result.transaction_id.starts_with("stripe_"));
        assert_eq!(result.message, "Stripe payment successful");
        assert_eq!(sink.lines(), vec!["Stripe: Charging 1050 cents"]);
    }

    #[rstest]
    fn test_paypal_completed_is_success() {
        let sink = RecordingSink::new();

        let result = Gateway::paypal().process_payment(20.00, "USD", &sink);

        assert!(result.success);
        assert!(result.transaction_id.starts_with("pp_"));
        assert_eq!(result.message, "PayPal payment COMPLETED");
        assert_eq!(sink.lines(), vec!["PayPal: Processing 20.0 USD"]);
    }

    #[rstest]
    fn test_razorpay_reports_order_id() {
        let sink = RecordingSink::new();

        let result = Gateway::razorpay().process_payment(500.00, "INR", &sink);

        assert!(result.success);
        assert!(result.transaction_id.starts_with("rzp_"));
        assert_eq!(result.message, "Razorpay order created");
        assert!(sink.contains("\"currency\":\"INR\""));
    }

    #[rstest]
    #[case(Gateway::stripe(), "USD")]
    #[case(Gateway::paypal(), "USD")]
    #[case(Gateway::razorpay(), "INR")]
    fn test_processor_picks_currency(#[case] gateway: Gateway, #[case] currency: &str) {
        let sink = RecordingSink::new();

        let result = PaymentProcessor::process(&gateway, 15.75, &sink);

        assert_eq!(gateway.default_currency(), currency);
        assert_eq!(
            sink.lines().last(),
            Some(&format!("Result: {}", result.message))
        );
    }

    #[rstest]
    fn test_transaction_ids_are_unique() {
        let sink = RecordingSink::new();
        let gateway = Gateway::stripe();

        let first = gateway.process_payment(1.0, "USD", &sink);
        let second = gateway.process_payment(1.0, "USD", &sink);

        assert_ne!(first.transaction_id, second.transaction_id);
    }
}
