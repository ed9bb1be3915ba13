//! Financial news retrieval and question answering
//!
//! Fetches recent articles from the configured listing pages, lists the
//! headlines, and answers free-form questions against the article text.
//! When nothing can be fetched the flow drops to a bundled demo corpus.

pub mod fetcher;
pub mod qa;

pub use fetcher::{Article, ArticleFetcher, Headline};
pub use qa::{ArticleQa, NO_ARTICLE_REPLY, NO_ANSWER_REPLY};

use crate::errors::Result;
use crate::repl::display::DisplayManager;

/// Bundled articles used when fetching fails or offline mode is on
pub fn demo_corpus() -> Vec<Article> {
    let entries: &[(&str, &str)] = &[
        (
            "Markets steady as investors weigh rate outlook",
            "Stocks closed little changed on Tuesday as investors weighed the \
             outlook for interest rates. Analysts said the market is waiting \
             for clearer signals from the central bank before taking on more \
             risk. Bond yields edged lower through the session.",
        ),
        (
            "Five habits for building an emergency fund",
            "Financial planners recommend keeping three to six months of \
             expenses in an emergency fund. Automating a monthly transfer to \
             savings is the easiest habit to sustain. Cutting one recurring \
             subscription can free up surprising room in a budget.",
        ),
        (
            "Tech earnings lift the broader index",
            "Strong quarterly earnings from large technology companies lifted \
             the broader index on Thursday. Revenue growth was driven by cloud \
             and advertising businesses. Several analysts raised their price \
             targets after the reports.",
        ),
        (
            "How dividend stocks fit a retirement portfolio",
            "Dividend-paying stocks can provide steady income for retirement \
             portfolios. Reinvesting dividends while still working compounds \
             returns over time. Advisers caution against chasing the highest \
             yields without checking payout sustainability.",
        ),
    ];

    entries
        .iter()
        .map(|(title, text)| Article {
            title: title.to_string(),
            link: format!(
                "https://finance.example.com/demo/{}",
                title.to_lowercase().replace(' ', "-")
            ),
            text: text.to_string(),
        })
        .collect()
}

/// Fetch the article corpus, dropping to the demo corpus when empty
pub async fn load_corpus(
    fetcher: &ArticleFetcher,
    display: &DisplayManager,
    offline: bool,
) -> Vec<Article> {
    if offline {
        display.show_warning("Offline mode: using bundled demo articles");
        return demo_corpus();
    }

    let spinner = display.start_fetch("Fetching articles...");
    let articles = fetcher.fetch_corpus().await;
    display.finish_fetch(spinner);

    if articles.is_empty() {
        display.show_warning("No articles could be fetched; using bundled demo articles");
        return demo_corpus();
    }
    articles
}

/// Print the loaded headlines
pub fn show_headlines(display: &DisplayManager, articles: &[Article]) {
    display.show_section("Financial News Articles");
    for (i, article) in articles.iter().enumerate() {
        display.show_numbered(i + 1, &format!("{} ({})", article.title, article.link));
    }
}

/// Run the article flow: list headlines, then answer one question if given
pub async fn run(
    fetcher: &ArticleFetcher,
    display: &DisplayManager,
    question: Option<&str>,
    offline: bool,
) -> Result<ArticleQa> {
    let articles = load_corpus(fetcher, display, offline).await;
    show_headlines(display, &articles);

    let qa = ArticleQa::new(articles);
    if let Some(question) = question {
        display.show_reply(&qa.answer(question));
    }
    Ok(qa)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_corpus_is_usable() {
        let corpus = demo_corpus();
        assert_eq!(corpus.len(), 4);
        for article in &corpus {
            assert!(!article.text.is_empty());
            assert!(article.link.starts_with("https://"));
        }
    }

    #[test]
    fn test_demo_corpus_answers_rate_question() {
        let qa = ArticleQa::new(demo_corpus());
        let answer = qa.answer("what is the outlook for interest rates?");
        assert_ne!(answer, NO_ARTICLE_REPLY);
        assert!(answer.to_lowercase().contains("rate"));
    }

    #[test]
    fn test_demo_corpus_answers_emergency_fund_question() {
        let qa = ArticleQa::new(demo_corpus());
        let answer = qa.answer("how much should I keep in an emergency fund?");
        assert!(answer.to_lowercase().contains("emergency fund"));
    }
}
