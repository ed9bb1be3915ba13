//! Financial news fetching and plain-text extraction
//!
//! Pulls headline/link pairs from listing pages, then fetches each
//! article and strips its paragraph text out of the HTML. Selector
//! fidelity is a non-goal; a loose regex pass is enough here, and any
//! page that fails to fetch or parse is skipped rather than fatal.

use regex::Regex;
use reqwest::Client;
use std::time::Duration;

use crate::errors::{AdvisorError, Result};

/// Maximum headlines taken per listing page
const HEADLINES_PER_PAGE: usize = 10;

/// A headline/link pair from a listing page
#[derive(Debug, Clone, PartialEq)]
pub struct Headline {
    pub title: String,
    pub link: String,
}

/// A fetched article with its extracted text
#[derive(Debug, Clone)]
pub struct Article {
    pub title: String,
    pub link: String,
    pub text: String,
}

/// News fetcher over one or more listing pages
pub struct ArticleFetcher {
    client: Client,
    listing_urls: Vec<String>,
    headline_pattern: Regex,
    paragraph_pattern: Regex,
    tag_pattern: Regex,
}

impl ArticleFetcher {
    /// Default listing pages (the original's four news sections)
    pub fn default_listing_urls() -> Vec<String> {
        vec![
            "https://finance.yahoo.com/topic/personal-finance-news/".to_string(),
            "https://finance.yahoo.com/".to_string(),
            "https://finance.yahoo.com/calendar/".to_string(),
            "https://finance.yahoo.com/topic/stock-market-news/".to_string(),
        ]
    }

    /// Create a fetcher over the given listing pages
    pub fn new(listing_urls: Vec<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(20))
            .user_agent(concat!("finbuddy/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(ArticleFetcher {
            client,
            listing_urls,
            headline_pattern: Regex::new(r#"(?s)<h3[^>]*>\s*<a[^>]*href="([^"]+)"[^>]*>(.*?)</a>"#)
                .expect("valid headline pattern"),
            paragraph_pattern: Regex::new(r"(?s)<p[^>]*>(.*?)</p>")
                .expect("valid paragraph pattern"),
            tag_pattern: Regex::new(r"<[^>]+>").expect("valid tag pattern"),
        })
    }

    /// Fetch headlines from every configured listing page
    ///
    /// Pages that fail are skipped; duplicates (same link) are dropped.
    pub async fn fetch_all_headlines(&self) -> Vec<Headline> {
        let mut headlines: Vec<Headline> = Vec::new();
        for url in &self.listing_urls {
            match self.fetch_headlines(url).await {
                Ok(page_headlines) => {
                    for headline in page_headlines {
                        if !headlines.iter().any(|h| h.link == headline.link) {
                            headlines.push(headline);
                        }
                    }
                }
                Err(_) => continue,
            }
        }
        headlines
    }

    /// Fetch headlines from one listing page
    pub async fn fetch_headlines(&self, base_url: &str) -> Result<Vec<Headline>> {
        let response = self.client.get(base_url).send().await?;
        if !response.status().is_success() {
            return Err(AdvisorError::ApiError(format!(
                "listing request failed with status {}",
                response.status()
            )));
        }

        let html = response.text().await?;
        Ok(self.parse_headlines(&html, base_url))
    }

    /// Fetch one article and extract its paragraph text
    pub async fn fetch_article_text(&self, link: &str) -> Result<String> {
        let response = self.client.get(link).send().await?;
        if !response.status().is_success() {
            return Err(AdvisorError::ApiError(format!(
                "article request failed with status {}",
                response.status()
            )));
        }

        let html = response.text().await?;
        Ok(self.extract_paragraphs(&html))
    }

    /// Fetch every headline's article; failures and empty bodies skipped
    pub async fn fetch_corpus(&self) -> Vec<Article> {
        let headlines = self.fetch_all_headlines().await;
        let mut articles = Vec::new();

        for headline in headlines {
            let Ok(text) = self.fetch_article_text(&headline.link).await else {
                continue;
            };
            if text.trim().is_empty() {
                continue;
            }
            articles.push(Article {
                title: headline.title,
                link: headline.link,
                text,
            });
        }
        articles
    }

    /// Pull headline/link pairs out of listing HTML
    fn parse_headlines(&self, html: &str, base_url: &str) -> Vec<Headline> {
        let origin = origin_of(base_url);

        self.headline_pattern
            .captures_iter(html)
            .take(HEADLINES_PER_PAGE)
            .filter_map(|caps| {
                let link = caps.get(1)?.as_str();
                let title = self.strip_tags(caps.get(2)?.as_str());
                if title.is_empty() {
                    return None;
                }
                let link = if link.starts_with("http") {
                    link.to_string()
                } else {
                    format!("{}{}", origin, link)
                };
                Some(Headline { title, link })
            })
            .collect()
    }

    /// Concatenated, tag-stripped paragraph text from article HTML
    fn extract_paragraphs(&self, html: &str) -> String {
        let paragraphs: Vec<String> = self
            .paragraph_pattern
            .captures_iter(html)
            .filter_map(|caps| caps.get(1))
            .map(|m| self.strip_tags(m.as_str()))
            .filter(|p| !p.is_empty())
            .collect();
        paragraphs.join(" ")
    }

    fn strip_tags(&self, html: &str) -> String {
        let text = self.tag_pattern.replace_all(html, " ");
        decode_entities(&text)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Scheme + host of a URL, for resolving relative links
fn origin_of(url: &str) -> String {
    if let Some(scheme_end) = url.find("://") {
        let rest = &url[scheme_end + 3..];
        let host_end = rest.find('/').unwrap_or(rest.len());
        return format!("{}{}", &url[..scheme_end + 3], &rest[..host_end]);
    }
    url.trim_end_matches('/').to_string()
}

/// Decode the handful of HTML entities that show up in article text
fn decode_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&nbsp;", " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher() -> ArticleFetcher {
        ArticleFetcher::new(vec![]).unwrap()
    }

    #[test]
    fn test_parse_headlines_absolute_and_relative_links() {
        let html = r#"
            <li><h3 class="headline"><a href="/news/markets-rally.html">Markets rally</a></h3></li>
            <li><h3><a data-x="1" href="https://other.example.com/full">Full <em>story</em></a></h3></li>
        "#;

        let headlines = fetcher().parse_headlines(html, "https://finance.example.com/topic/");
        assert_eq!(headlines.len(), 2);
        assert_eq!(
            headlines[0].link,
            "https://finance.example.com/news/markets-rally.html"
        );
        assert_eq!(headlines[0].title, "Markets rally");
        assert_eq!(headlines[1].title, "Full story");
        assert_eq!(headlines[1].link, "https://other.example.com/full");
    }

    #[test]
    fn test_parse_headlines_empty_html() {
        assert!(fetcher()
            .parse_headlines("<html><body></body></html>", "https://x.example")
            .is_empty());
    }

    #[test]
    fn test_extract_paragraphs_strips_tags_and_entities() {
        let html = r#"
            <p>Stocks rose <b>sharply</b> on Tuesday.</p>
            <p class="x">Rates &amp; bonds were flat.</p>
            <p>   </p>
        "#;

        let text = fetcher().extract_paragraphs(html);
        assert_eq!(
            text,
            "Stocks rose sharply on Tuesday. Rates & bonds were flat."
        );
    }

    #[test]
    fn test_origin_of() {
        assert_eq!(
            origin_of("https://finance.example.com/topic/news/"),
            "https://finance.example.com"
        );
        assert_eq!(origin_of("https://host.example"), "https://host.example");
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(decode_entities("a &amp; b &#39;c&#39;"), "a & b 'c'");
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_fetch_headlines_integration() {
        let fetcher = ArticleFetcher::new(ArticleFetcher::default_listing_urls()).unwrap();
        let headlines = fetcher.fetch_all_headlines().await;
        assert!(!headlines.is_empty());
    }
}
