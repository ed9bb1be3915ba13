//! Built-in intent table for the advisor chatbot

/// Advisor features an intent can route to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    /// Stock consulting (financial statements and quote)
    Stocks,
    /// Personal budget calculator
    Budget,
    /// Similar-date stock recommendation
    Recommend,
    /// Financial news articles and QA
    Articles,
}

impl Feature {
    /// Human-readable feature name
    pub fn name(&self) -> &'static str {
        match self {
            Feature::Stocks => "Stocks Consulting",
            Feature::Budget => "Personal Finance",
            Feature::Recommend => "Stock Recommendation",
            Feature::Articles => "Advice Articles",
        }
    }
}

/// What the chatbot does when an intent matches
#[derive(Debug, Clone)]
pub enum IntentAction {
    /// Canned replies; one is picked at random
    Replies(&'static [&'static str]),
    /// Route the conversation to a feature flow
    Page(Feature),
}

const GREETINGS: &[&str] = &[
    "Hello! How can I assist you today?",
    "Hi there! How can I help you?",
    "Good morning! How can I help you start your day?",
];

const HOW_ARE_YOU: &[&str] = &[
    "I'm just a program, but thanks for asking!",
    "I'm here and ready to help. What can I do for you today?",
];

const WHO_ARE_YOU: &[&str] = &[
    "I am your Financial Advisor Bot, designed to provide information and \
     assistance on personal finance.",
    "I am a virtual assistant focused on helping you with financial advice.",
];

const WHAT_CAN_YOU_DO: &[&str] = &[
    "I can provide guidance on budgeting, investments, retirement planning, \
     and more. Feel free to ask me any questions related to personal finance!",
    "You can ask me about budgeting strategies, investment tips, and \
     retirement planning. How can I assist you today?",
];

/// Ordered intent table: key phrase to action
pub struct IntentTable {
    entries: Vec<(&'static str, IntentAction)>,
}

impl IntentTable {
    /// The advisor's built-in intents
    pub fn builtin() -> Self {
        IntentTable {
            entries: vec![
                ("hello", IntentAction::Replies(GREETINGS)),
                ("hi", IntentAction::Replies(GREETINGS)),
                ("good morning", IntentAction::Replies(GREETINGS)),
                ("how are you", IntentAction::Replies(HOW_ARE_YOU)),
                ("who are you", IntentAction::Replies(WHO_ARE_YOU)),
                ("what can you do", IntentAction::Replies(WHAT_CAN_YOU_DO)),
                ("stocks consulting", IntentAction::Page(Feature::Stocks)),
                ("personal finance", IntentAction::Page(Feature::Budget)),
                ("stock recommendation", IntentAction::Page(Feature::Recommend)),
                ("advice articles", IntentAction::Page(Feature::Articles)),
            ],
        }
    }

    /// Intent key phrases, in table order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    /// Action for the intent at `index`
    pub fn action(&self, index: usize) -> &IntentAction {
        &self.entries[index].1
    }

    /// Number of intents
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
