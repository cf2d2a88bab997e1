//! Synthetic URL records for demos, benches, and tests. Mixes high, medium,
//! and low risk profiles so clustering has structure to find.

use super::UrlRecord;
use rand::Rng;

const DOMAINS: &[&str] = &[
    "paypal-secure",
    "amazon-login",
    "facebook-verify",
    "google-account",
    "microsoft-update",
    "apple-support",
    "netflix-billing",
    "instagram-security",
    "linkedin-profile",
    "twitter-verify",
    "dropbox-storage",
    "github-access",
];

const TLDS: &[&str] = &[".com", ".net", ".org", ".info", ".xyz", ".tk", ".ml", ".ga"];

const SUSPICIOUS_LABELS: &[&str] = &[
    "-", "_", "1", "2", "3", "login", "secure", "verify", "update",
];

/// Generate `count` synthetic records. Risk profile per record: ~40% high,
/// half of the rest medium. Derived attributes are computed from the
/// assembled URL text, so they stay consistent with it.
pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<UrlRecord> {
    (0..count)
        .map(|i| {
            let high_risk = rng.gen_bool(0.4);
            let medium_risk = !high_risk && rng.gen_bool(0.5);

            let domain = DOMAINS[rng.gen_range(0..DOMAINS.len())];
            let tld = TLDS[rng.gen_range(0..TLDS.len())];
            let subdomains = if high_risk {
                rng.gen_range(2..=5)
            } else {
                rng.gen_range(0..=1)
            };

            let mut url = String::from("http");
            if !high_risk || rng.gen_bool(0.3) {
                url.push('s');
            }
            url.push_str("://");

            for _ in 0..subdomains {
                url.push_str(SUSPICIOUS_LABELS[rng.gen_range(0..SUSPICIOUS_LABELS.len())]);
                url.push('.');
            }
            url.push_str(domain);
            url.push_str(tld);

            if high_risk {
                let segments = rng.gen_range(1..=3);
                for label in SUSPICIOUS_LABELS.iter().take(segments) {
                    url.push('/');
                    url.push_str(label);
                }
            }

            let domain_age_days = if high_risk {
                rng.gen_range(0..180)
            } else if medium_risk {
                rng.gen_range(180..545)
            } else {
                rng.gen_range(365..1095)
            };

            UrlRecord::from_url(format!("url-{}", i + 1), url, domain_age_days)
        })
        .collect()
}
