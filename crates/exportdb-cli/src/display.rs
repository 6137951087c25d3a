//! Terminal rendering for result pages.
//!
//! All formatting heuristics live here, outside the core pipeline: the
//! contact column in particular is presentation logic, not query logic.

use exportdb_core::present::Page;
use exportdb_core::Record;

/// Public directory of tea/coffee exporters, used when a record has no
/// contact of its own.
const NAEB_EXPORTERS_URL: &str =
    "https://www.naeb.gov.rw/rwanda-coffee/stakeholders/coffee-exporters";

pub fn print_page(page: &Page<'_>) {
    if page.items.is_empty() {
        println!("No results found.");
        return;
    }

    println!(
        "{:<28} {:<20} {:<16} {:>10}  {}",
        "Exporter", "Product", "Country", "Net Price", "Contact"
    );
    for r in &page.items {
        println!(
            "{:<28} {:<20} {:<16} {:>10}  {}",
            r.company_name,
            r.product,
            r.destination().unwrap_or("N/A"),
            price_cell(r),
            contact_cell(r),
        );
    }
    println!(
        "page {} of {} ({} records)",
        page.page, page.total_pages, page.total_records
    );
}

fn price_cell(r: &Record) -> String {
    match r.net_price {
        Some(p) => format!("${p}"),
        None => "N/A".to_string(),
    }
}

/// Contact column heuristic: an email address gets a mailto link, anything
/// that already looks like a URL passes through, a bare domain gets an
/// https prefix, and tea/coffee exporters without any contact fall back to
/// the NAEB directory.
pub fn contact_cell(r: &Record) -> String {
    match r.website.as_deref() {
        Some(w) if w.contains('@') => format!("mailto:{w}"),
        Some(w) if w.starts_with("http://") || w.starts_with("https://") => w.to_string(),
        Some(w) => format!("https://{w}"),
        None => {
            let p = r.product.to_lowercase();
            if p == "tea" || p == "coffee" {
                format!("see {NAEB_EXPORTERS_URL}")
            } else {
                "N/A".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(product: &str, website: Option<&str>) -> Record {
        Record {
            company_name: "Acme".into(),
            product: product.into(),
            export_to: None,
            net_price: None,
            website: website.map(Into::into),
        }
    }

    #[test]
    fn email_becomes_mailto() {
        assert_eq!(
            contact_cell(&rec("Tea", Some("info@acme.rw"))),
            "mailto:info@acme.rw"
        );
    }

    #[test]
    fn bare_domain_gets_https() {
        assert_eq!(contact_cell(&rec("Tea", Some("acme.rw"))), "https://acme.rw");
    }

    #[test]
    fn full_url_passes_through() {
        assert_eq!(
            contact_cell(&rec("Tea", Some("https://acme.rw/shop"))),
            "https://acme.rw/shop"
        );
    }

    #[test]
    fn tea_and_coffee_fall_back_to_naeb() {
        assert!(contact_cell(&rec("Coffee", None)).contains("naeb.gov.rw"));
        assert!(contact_cell(&rec("TEA", None)).contains("naeb.gov.rw"));
    }

    #[test]
    fn other_products_without_contact_show_na() {
        assert_eq!(contact_cell(&rec("Coltan", None)), "N/A");
    }
}
