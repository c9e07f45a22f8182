//! Privacy policy and terms of use as structured sections.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegalSection {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
    pub bullets: &'static [&'static str],
    /// Text rendered after the bullet list.
    pub footnote: Option<&'static str>,
}

impl LegalSection {
    const fn text(heading: &'static str, paragraphs: &'static [&'static str]) -> Self {
        Self {
            heading,
            paragraphs,
            bullets: &[],
            footnote: None,
        }
    }

    const fn list(
        heading: &'static str,
        lead: &'static [&'static str],
        bullets: &'static [&'static str],
    ) -> Self {
        Self {
            heading,
            paragraphs: lead,
            bullets,
            footnote: None,
        }
    }

    const fn with_footnote(mut self, footnote: &'static str) -> Self {
        self.footnote = Some(footnote);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegalDocument {
    pub title: &'static str,
    pub last_updated: &'static str,
    pub sections: &'static [LegalSection],
    pub contact_email: &'static str,
    pub acknowledgment: &'static str,
}

pub const PRIVACY_POLICY: LegalDocument = LegalDocument {
    title: "Privacy Policy",
    last_updated: "March 2025",
    contact_email: "privacy@aidratech.com",
    acknowledgment: "By using our service, you acknowledge that you have read and understood this Privacy Policy and consent to the collection and use of your information as described herein.",
    sections: &[
        LegalSection::text(
            "1. Introduction",
            &[
                "Welcome to Aidra Tech Inc. (\"Aidra\", \"we\", \"us\", or \"our\"). We are committed to protecting your personal information and respecting your privacy. This Privacy Policy explains how we collect, use, store, and share your personal data when you visit our website or interact with our services.",
                "By accessing or using our website, you consent to the practices described in this Privacy Policy.",
            ],
        ),
        LegalSection::text(
            "2. Scope",
            &["This Privacy Policy applies to all digital properties owned or operated by Aidra Tech Inc., including websites, platforms, and digital services. It does not apply to third-party websites or services that may be linked from our website."],
        ),
        LegalSection::list(
            "3. Definitions",
            &[],
            &[
                "Personal Data: Any information that relates to an identified or identifiable individual.",
                "User: Any individual accessing the Aidra website or services.",
                "Service Provider: Vendors or contractors supporting Aidra's operations (e.g., hosting, analytics).",
                "Usage Data: Automatically collected technical data such as IP address, browser type, device ID, and session activity.",
                "Cookies: Small data files stored on your device to enhance browsing experience and track site preferences.",
            ],
        ),
        LegalSection::list(
            "4. What We Collect",
            &["We may collect:"],
            &[
                "Name and surname",
                "Email address",
                "Professional role or company",
                "Usage Data via cookies, analytics, and web tools",
                "Information you submit (e.g., contact form or demo request)",
            ],
        ),
        LegalSection::list(
            "5. Why We Collect It",
            &["We use your data to:"],
            &[
                "Operate and improve our services and website",
                "Respond to demo requests or inquiries",
                "Communicate relevant offers or updates (with your consent)",
                "Ensure security, detect fraud, and maintain legal compliance",
            ],
        ),
        LegalSection::list(
            "6. Legal Basis (GDPR)",
            &["We process data based on:"],
            &[
                "Your consent",
                "The performance of a contract",
                "Legal obligations",
                "Our legitimate interests (e.g., service improvement, analytics)",
            ],
        ),
        LegalSection::list(
            "7. Sharing of Personal Data",
            &["We never sell your data. We may share it with:"],
            &[
                "Service Providers for infrastructure, security, analytics, or email delivery",
                "Affiliates under strict confidentiality",
                "Legal authorities, if required by law",
                "Buyers, in case of merger or acquisition (with notice)",
            ],
        ),
        LegalSection::text(
            "8. Data Transfers",
            &["Your data may be processed in countries outside your residence. Aidra applies GDPR-compliant safeguards, including Standard Contractual Clauses (SCCs), to ensure secure international data transfers."],
        ),
        LegalSection::text(
            "9. Data Security",
            &["We implement physical, technical, and organizational measures to protect your data. However, no method is 100% secure, and we advise all users to practice safe data hygiene."],
        ),
        LegalSection::text(
            "10. Data Retention",
            &["We retain your data only as long as necessary to fulfill its intended purpose or comply with applicable legal requirements."],
        ),
        LegalSection::list(
            "11. Your Rights (GDPR)",
            &["You have the right to:"],
            &[
                "Access, update, or delete your data",
                "Withdraw consent at any time",
                "Object to processing based on legitimate interest",
                "Request data portability",
                "File a complaint with a data protection authority",
            ],
        )
        .with_footnote("Contact: privacy@aidratech.com"),
        LegalSection::text(
            "12. Children's Privacy",
            &["Our services are not intended for users under 18 years old. We do not knowingly collect data from minors."],
        ),
        LegalSection::list(
            "13. Cookie Policy",
            &["Aidra uses cookies and similar tracking technologies to:"],
            &[
                "Enable core site functionality (e.g., login, preferences)",
                "Measure website performance and user behavior",
                "Personalize user experience and optimize content",
                "Essential Cookies: required for site navigation and basic functionality",
                "Analytics Cookies: help us understand how visitors interact with the site",
                "Marketing Cookies: (only with consent) used for personalized advertising or campaigns",
            ],
        )
        .with_footnote("You can manage or disable cookies through your browser settings. For more information on how to manage cookies, visit www.allaboutcookies.org."),
        LegalSection::text(
            "14. Marketing Preferences",
            &["You can opt in or out of receiving communications from Aidra at any time by contacting privacy@aidratech.com."],
        ),
        LegalSection::text(
            "15. Breach Notification",
            &["In case of a data breach that affects your personal information, we will notify you promptly and follow regulatory reporting requirements."],
        ),
        LegalSection::text(
            "16. Changes to This Policy",
            &["We may update this policy from time to time. The \"last updated\" date will be revised, and material changes will be clearly communicated."],
        ),
        LegalSection::text(
            "17. Contact Us",
            &["If you have any questions or requests related to this policy or your data, contact Aidra Tech Inc."],
        ),
    ],
};

pub const TERMS_OF_USE: LegalDocument = LegalDocument {
    title: "Terms of Use",
    last_updated: "March 2024",
    contact_email: "legal@aidratech.com",
    acknowledgment: "By using our Website, you acknowledge that you have read and understood these Terms of Use and agree to be bound by them.",
    sections: &[
        LegalSection::text(
            "1. Purpose",
            &[
                "These Terms of Use constitute a legal agreement between any visitor and/or user (\"User\") and Aidra Tech Inc. (\"Aidra\"), and govern access to and use of Aidra's website (the \"Website\").",
                "By accessing or using the Website, the User agrees to be bound by these Terms of Use and all applicable laws and regulations. If the User does not agree to these terms, they must not use the Website.",
            ],
        ),
        LegalSection::text(
            "2. Ownership",
            &["The Website is owned and operated by Aidra Tech Inc. Unless otherwise stated, all content, trademarks, data, software, and materials on the Website are the intellectual property of Aidra or its licensors. No material may be copied, modified, or redistributed without Aidra's prior written permission."],
        ),
        LegalSection::text(
            "3. Platform Purpose",
            &["Aidra provides a unified SaaS platform to help businesses and institutions monitor environmental impact, trace waste flows, and generate certified carbon credits. While the Website may describe Aidra's services, access to the full platform requires a separate agreement or subscription."],
        ),
        LegalSection::text(
            "4. Availability & Maintenance",
            &["Aidra aims to ensure the Website is operational and accurate but makes no guarantee of uninterrupted service. Access may be restricted for maintenance, updates, or technical reasons without prior notice."],
        ),
        LegalSection::list(
            "5. Use of the Website",
            &["Users may access and use the Website solely for personal or internal business purposes. Users may not:"],
            &[
                "Modify or reverse-engineer any part of the Website;",
                "Use the Website for unlawful purposes;",
                "Violate intellectual property rights;",
                "Attempt to disrupt the Website's functionality.",
            ],
        ),
        LegalSection::text(
            "6. Intellectual Property",
            &["All content (text, graphics, videos, reports, illustrations, code) on the Website is protected by copyright and intellectual property law. Aidra retains all rights unless otherwise stated."],
        ),
        LegalSection::text(
            "7. Licenses & Restrictions",
            &["Content displayed on the Website may be used for viewing or educational purposes. Commercial use, reproduction, or redistribution without prior consent is prohibited."],
        ),
        LegalSection::text(
            "8. Security & Conduct",
            &["Users must not attempt to hack, overload, crawl, or bypass security measures on the Website. Aidra reserves the right to restrict or terminate access in case of misuse or illegal behavior."],
        ),
        LegalSection::text(
            "9. Disclaimers",
            &["The Website and its content are provided \"as is.\" Aidra makes no warranties regarding accuracy, completeness, or performance. Users use the Website at their own risk."],
        ),
        LegalSection::text(
            "10. Limitation of Liability",
            &["Aidra is not liable for any direct, indirect, incidental, or consequential damages resulting from Website use, including data loss, service interruption, or platform reliance."],
        ),
        LegalSection::text(
            "11. Indemnification",
            &["Users agree to defend and hold harmless Aidra, its affiliates, and its partners from any claims arising out of their use of the Website or violation of these Terms of Use."],
        ),
        LegalSection::text(
            "12. Privacy",
            &["Use of the Website is subject to Aidra's Privacy Policy. Users are responsible for safeguarding their personal data and access credentials."],
        ),
        LegalSection::text(
            "13. External Links",
            &["The Website may contain links to third-party websites. Aidra is not responsible for content, accuracy, or policies on external sites and provides such links for convenience only."],
        ),
        LegalSection::text(
            "14. Termination",
            &["Aidra may suspend or terminate a User's access for breach of these Terms, misuse, or legal noncompliance, with or without prior notice."],
        ),
        LegalSection::text(
            "15. Governing Law",
            &["These Terms shall be governed by and interpreted in accordance with the laws of the Kingdom of Saudi Arabia or any other jurisdiction in which Aidra operates, depending on the applicable contract or user location."],
        ),
        LegalSection::text(
            "16. Contact & Notifications",
            &["All legal inquiries should be directed to Aidra Tech Inc."],
        ),
        LegalSection::text(
            "17. Modification of Terms",
            &["Aidra reserves the right to revise these Terms at any time by updating this page. Continued use of the Website constitutes acceptance of the revised Terms."],
        ),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_are_numbered_in_order() {
        for doc in [PRIVACY_POLICY, TERMS_OF_USE] {
            assert_eq!(doc.sections.len(), 17, "{}", doc.title);
            for (i, section) in doc.sections.iter().enumerate() {
                let prefix = format!("{}. ", i + 1);
                assert!(section.heading.starts_with(&prefix), "{}", section.heading);
                assert!(!section.paragraphs.is_empty() || !section.bullets.is_empty());
            }
        }
    }

    #[test]
    fn test_contact_addresses() {
        assert_eq!(PRIVACY_POLICY.contact_email, "privacy@aidratech.com");
        assert_eq!(TERMS_OF_USE.contact_email, "legal@aidratech.com");
    }
}
