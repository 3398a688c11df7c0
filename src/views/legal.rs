use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegalDocument {
    Privacy,
    Terms,
}

impl LegalDocument {
    pub fn title(self) -> &'static str {
        match self {
            LegalDocument::Privacy => "Privacy Policy",
            LegalDocument::Terms => "Terms of Service",
        }
    }

    /// (heading, body) pairs.
    pub fn sections(self) -> &'static [(&'static str, &'static str)] {
        match self {
            LegalDocument::Privacy => &PRIVACY_SECTIONS,
            LegalDocument::Terms => &TERMS_SECTIONS,
        }
    }
}

const PRIVACY_SECTIONS: [(&str, &str); 4] = [
    (
        "What we collect",
        "Neura keeps your theme preference on this device and your sign-in email for the current session only.",
    ),
    (
        "Conversations",
        "Chat messages live in memory while the chat page is open. They are never sent anywhere and are gone when you leave.",
    ),
    (
        "Sharing",
        "Nothing is shared with third parties. There is no server to share it with.",
    ),
    (
        "Your choices",
        "Clear your browser or app data to remove the stored theme. Signing out removes the session record.",
    ),
];

const TERMS_SECTIONS: [(&str, &str); 4] = [
    (
        "Using Neura",
        "Neura is a preview. Replies are simulated and should not be relied on for advice of any kind.",
    ),
    (
        "Accounts",
        "Accounts are for demonstration. No password is verified or stored.",
    ),
    (
        "Availability",
        "Features may change or disappear without notice while Neura is in alpha.",
    ),
    (
        "Liability",
        "Neura is provided as is, without warranty of any kind.",
    ),
];

#[component]
pub fn LegalView(document: LegalDocument) -> Element {
    rsx! {
        div { class: "main-container legal",
            article { class: "card legal-card",
                h2 { "{document.title()}" }
                for (heading, body) in document.sections().iter() {
                    section { key: "{heading}",
                        h3 { class: "section-title", "{heading}" }
                        p { "{body}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_have_content() {
        for document in [LegalDocument::Privacy, LegalDocument::Terms] {
            assert!(!document.sections().is_empty());
            assert!(document.sections().iter().all(|(h, b)| !h.is_empty() && !b.is_empty()));
        }
        assert_eq!(LegalDocument::Terms.title(), "Terms of Service");
    }
}
