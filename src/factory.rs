//! Factory pattern: payment methods created from a type name and details.
//!
//! [`PaymentFactory::create`] selects the [`Payment`] variant from a type
//! name and validates that enough details were supplied. Processing
//! dispatches over the closed set of variants with an exhaustive `match`.
//!
//! # Examples
//!
//! ```
//! use design_patterns::factory::{Payment, PaymentFactory};
//! use design_patterns::output::RecordingSink;
//!
//! let sink = RecordingSink::new();
//! let payment = PaymentFactory::create("upi", &["user@bank"]).unwrap();
//!
//! assert_eq!(
//!     PaymentFactory::process_payment(&payment, 250.50, &sink),
//!     "UPI processed: user@bank"
//! );
//! assert!(sink.contains("Processing UPI payment"));
//! ```

use thiserror::Error;

use crate::error::{ValidationError, require};
use crate::output::MessageSink;

/// Errors returned by [`PaymentFactory::create`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// The type name matches no payment kind.
    #[error("Unknown payment type: {0}")]
    UnknownType(String),

    /// Not enough details for the selected kind.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// A payment method.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Payment {
    /// Card payment.
    CreditCard {
        /// Card number
        card_number: String,
        /// Card verification value
        cvv: String,
    },
    /// UPI payment.
    Upi {
        /// UPI virtual payment address
        upi_id: String,
    },
    /// Net banking transfer.
    NetBanking {
        /// Account number
        account_number: String,
        /// Branch IFSC code
        ifsc: String,
    },
}

impl Payment {
    /// Charges `amount`, writing a progress line to `sink`.
    ///
    /// The demo processors always succeed.
    pub fn process(&self, amount: f64, sink: &dyn MessageSink) -> bool {
        let line = match self {
            Self::CreditCard { .. } => format!("Processing credit card payment: ${amount:?}"),
            Self::Upi { .. } => format!("Processing UPI payment: ₹{amount:?}"),
            Self::NetBanking { .. } => format!("Processing net banking: ₹{amount:?}"),
        };
        sink.emit(&line);
        true
    }

    /// Returns a transaction id made of the kind prefix and the current
    /// time in milliseconds.
    #[must_use]
    pub fn transaction_id(&self) -> String {
        format!("{}-{}", self.prefix(), chrono::Utc::now().timestamp_millis())
    }

    /// Transaction id prefix of the kind.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::CreditCard { .. } => "CC",
            Self::Upi { .. } => "UPI",
            Self::NetBanking { .. } => "NB",
        }
    }
}

/// Creates and processes payments.
#[derive(Clone, Copy, Debug, Default)]
pub struct PaymentFactory;

impl PaymentFactory {
    /// Creates a payment from a case-insensitive type name and its details.
    ///
    /// | type          | details                     |
    /// |---------------|-----------------------------|
    /// | `credit_card` | card number, cvv            |
    /// | `upi`         | UPI id                      |
    /// | `netbanking`  | account number, IFSC code   |
    ///
    /// Extra details are ignored.
    ///
    /// # Errors
    ///
    /// - [`PaymentError::UnknownType`] for an unrecognised type name
    /// - [`PaymentError::Validation`] wrapping
    ///   [`ValidationError::MissingRequiredField`] naming the first missing detail
    pub fn create(kind: &str, details: &[&str]) -> Result<Payment, PaymentError> {
        let detail = |index: usize, field: &'static str| {
            require(field, details.get(index).map(ToString::to_string))
        };

        let payment = match kind.to_lowercase().as_str() {
            "credit_card" => Payment::CreditCard {
                card_number: detail(0, "card_number")?,
                cvv: detail(1, "cvv")?,
            },
            "upi" => Payment::Upi {
                upi_id: detail(0, "upi_id")?,
            },
            "netbanking" => Payment::NetBanking {
                account_number: detail(0, "account_number")?,
                ifsc: detail(1, "ifsc")?,
            },
            _ => {
                tracing::warn!(kind, "unknown payment type");
                return Err(PaymentError::UnknownType(kind.to_string()));
            }
        };

        tracing::debug!(prefix = payment.prefix(), "payment created");
        Ok(payment)
    }

    /// Processes `payment` and returns a summary naming its identifier.
    pub fn process_payment(payment: &Payment, amount: f64, sink: &dyn MessageSink) -> String {
        payment.process(amount, sink);
        match payment {
            Payment::CreditCard { card_number, .. } => {
                format!("Credit card processed: {card_number}")
            }
            Payment::Upi { upi_id } => format!("UPI processed: {upi_id}"),
            Payment::NetBanking { account_number, .. } => {
                format!("Net banking processed: {account_number}")
            }
        }
    }
}
