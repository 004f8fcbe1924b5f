//! Contact details (emails, phone numbers, postal addresses).

use std::collections::BTreeSet;
use std::sync::LazyLock;

use brandscope_core::ContactDetails;
use regex::Regex;
use scraper::{Html, Selector};

use super::{element_text, selector};
use crate::client::StorefrontClient;

pub const CONTACT_PATH: &str = "/pages/contact";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid email regex")
});
// Also matches dates and order numbers; extract_phones filters by digit count.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+?\(?\d{1,4}\)?(?:[-.\s]?\(?\d{2,4}\)?){2,4}").expect("valid phone regex")
});
static ADDRESS: LazyLock<Selector> = LazyLock::new(|| selector(".address, .contact-address"));

const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;

impl StorefrontClient {
    /// Fetches the contact page. A missing page yields empty details, never `None`.
    pub async fn fetch_contact_details(&self, store_url: &str) -> ContactDetails {
        match self.fetch_page(store_url, CONTACT_PATH).await {
            Some(page) => contact_details(&page.document()),
            None => ContactDetails::default(),
        }
    }
}

/// Pattern-matches emails and phone numbers over all document text and
/// collects `.address` / `.contact-address` blocks verbatim.
#[must_use]
pub fn contact_details(document: &Html) -> ContactDetails {
    let text = document
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ");

    let addresses = document
        .select(&ADDRESS)
        .map(element_text)
        .filter(|a| !a.is_empty())
        .collect();

    ContactDetails {
        emails: extract_emails(&text),
        phones: extract_phones(&text),
        addresses,
    }
}

/// Unique email-shaped substrings, sorted.
#[must_use]
pub fn extract_emails(text: &str) -> Vec<String> {
    EMAIL_RE
        .find_iter(text)
        .map(|m| m.as_str().to_owned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Unique phone-number-shaped substrings, sorted.
#[must_use]
pub fn extract_phones(text: &str) -> Vec<String> {
    PHONE_RE
        .find_iter(text)
        .map(|m| m.as_str().trim().to_owned())
        .filter(|candidate| {
            let digits = candidate.chars().filter(char::is_ascii_digit).count();
            (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits)
        })
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emails_are_deduplicated() {
        let emails = extract_emails("Write hello@acme.com, or support@acme.co.uk. Again: hello@acme.com");
        assert_eq!(emails, vec!["hello@acme.com", "support@acme.co.uk"]);
    }

    #[test]
    fn phones_in_common_formats() {
        let phones = extract_phones("Call +1 555-123-4567 or (555) 987-6543 today. Fax 555.222.3333");
        assert!(phones.contains(&"+1 555-123-4567".to_string()), "{phones:?}");
        assert!(phones.contains(&"(555) 987-6543".to_string()), "{phones:?}");
        assert!(phones.contains(&"555.222.3333".to_string()), "{phones:?}");
    }

    #[test]
    fn prices_are_not_phones() {
        assert!(extract_phones("Tees from $25.00, hoodies $60").is_empty());
    }

    #[test]
    fn contact_details_reads_text_and_address_blocks() {
        let html = Html::parse_document(
            r#"<main>
                 <p>Email: <a href="mailto:hi@acme.com">hi@acme.com</a></p>
                 <p>Phone: 555-123-4567</p>
                 <div class="address">1 Main St, Springfield</div>
                 <div class="contact-address">1 Main St, Springfield</div>
               </main>"#,
        );
        let details = contact_details(&html);
        assert_eq!(details.emails, vec!["hi@acme.com"]);
        assert_eq!(details.phones, vec!["555-123-4567"]);
        assert_eq!(
            details.addresses,
            vec!["1 Main St, Springfield", "1 Main St, Springfield"]
        );
    }

    #[test]
    fn adjacent_text_nodes_do_not_merge_into_one_email() {
        let html = Html::parse_document("<p><span>sales@acme.com</span><span>Hours</span></p>");
        assert_eq!(contact_details(&html).emails, vec!["sales@acme.com"]);
    }
}
