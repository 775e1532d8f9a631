//! Fixed copy for the QuickGrocery support widget.

/// Constraint text sent as the provider system instruction on every
/// exchange: the bot explains platform processes and never performs
/// account actions.
pub const SYSTEM_PROMPT: &str = "\
You are a helpful Grocery Delivery Process Explainer Bot for QuickGrocery platform.

Your role is to ONLY explain and clarify:
- How grocery delivery works (order placement to delivery)
- Order stages (picking, packing, dispatch, delivery)
- Item substitution policies when items are unavailable
- Packing processes and quality checks
- Delivery timelines and what to expect at each stage

STRICT RESTRICTIONS - You MUST NOT:
\u{274c} Modify or cancel any orders
\u{274c} Track specific order status
\u{274c} Promise specific delivery times
\u{274c} Process refunds or payments

Always direct users to the app or customer support for actual order actions.";

/// Shown in place of assistant output when a stream faults; any partial
/// content accumulated before the fault is discarded.
pub const STREAM_ERROR_FALLBACK: &str =
    "I encountered an error. Please direct account actions to support.";

/// Greeting the presentation layer renders before the first exchange.
pub const WELCOME_MESSAGE: &str = "\u{1f44b} Welcome to QuickGrocery Support! I'm your AI guide \
for understanding how we handle your orders, from picking the freshest produce to final \
delivery.\n\nWhat would you like to know about our process?";

/// One canned inquiry offered on the empty conversation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub title: &'static str,
    pub prompt: &'static str,
    pub icon: &'static str,
}

pub const SUGGESTIONS: [Suggestion; 4] = [
    Suggestion {
        title: "Process Overview",
        prompt: "How does grocery delivery work?",
        icon: "\u{1f69a}",
    },
    Suggestion {
        title: "Unavailable Items",
        prompt: "What happens if an item is unavailable?",
        icon: "\u{1f504}",
    },
    Suggestion {
        title: "Packing Process",
        prompt: "Explain order packing process",
        icon: "\u{1f4e6}",
    },
    Suggestion {
        title: "Delivery Stages",
        prompt: "What are delivery stages?",
        icon: "\u{1f4cd}",
    },
];
