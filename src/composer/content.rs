//! Static marketing copy for the brochure and flyer.
//!
//! Layout code only reads these tables, so templates can be exercised with
//! synthetic content of any length.

use super::palette::{GOLD, GREEN, ORANGE, PURPLE};
use crate::writer::Color;

/// A value/label pair shown in a cover badge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat<'a> {
    /// Large value, e.g. `$5`
    pub value: &'a str,
    /// Caption under the value
    pub label: &'a str,
}

/// One income-stream card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamCard<'a> {
    /// Stripe and badge colour
    pub accent: Color,
    /// Card title
    pub title: &'a str,
    /// Wrapped body text
    pub description: &'a str,
}

/// One numbered join step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step<'a> {
    /// Step title
    pub title: &'a str,
    /// One-line explanation
    pub description: &'a str,
}

/// A question and its answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Faq<'a> {
    /// Question text, without prefix
    pub question: &'a str,
    /// Answer text, without prefix
    pub answer: &'a str,
}

/// A coloured one-liner on the flyer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyerLine<'a> {
    /// Text colour
    pub color: Color,
    /// Line text
    pub text: &'a str,
}

/// Copy for the three-page brochure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrochureContent<'a> {
    /// Logo mark text
    pub logo: &'a str,
    /// Cover title
    pub title: &'a str,
    /// Cover subtitle
    pub subtitle: &'a str,
    /// Text in the highlighted tagline box
    pub tagline: &'a str,
    /// Cover statistic badges
    pub stats: &'a [Stat<'a>],
    /// Cover footer line
    pub footer: &'a str,
    /// Header of the income-streams page
    pub streams_heading: &'a str,
    /// Income-stream cards, laid out two per row
    pub streams: &'a [StreamCard<'a>],
    /// Section head above the matrix bullets
    pub matrix_heading: &'a str,
    /// Matrix explanation bullets
    pub matrix_points: &'a [&'a str],
    /// Header of the join-guide page
    pub guide_heading: &'a str,
    /// Section head above the steps
    pub steps_heading: &'a str,
    /// Numbered join steps
    pub steps: &'a [Step<'a>],
    /// Section head above the questions
    pub faq_heading: &'a str,
    /// Questions and answers
    pub faq: &'a [Faq<'a>],
    /// Call-to-action heading
    pub cta_heading: &'a str,
    /// Line under the referral link
    pub cta_note: &'a str,
}

/// Copy for the single-page flyer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyerContent<'a> {
    /// Logo mark text
    pub logo: &'a str,
    /// Title
    pub title: &'a str,
    /// Subtitle
    pub subtitle: &'a str,
    /// Text in the hook callout box
    pub hook: &'a str,
    /// Income-stream one-liners
    pub streams: &'a [FlyerLine<'a>],
    /// Trust badges, laid out two per row
    pub badges: &'a [&'a str],
    /// Call-to-action heading above the link
    pub cta_heading: &'a str,
}

/// All promotional copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PromoContent<'a> {
    /// Brochure copy
    pub brochure: BrochureContent<'a>,
    /// Flyer copy
    pub flyer: FlyerContent<'a>,
}

/// The GICLUB campaign copy.
pub const GICLUB: PromoContent<'static> = PromoContent {
    brochure: BrochureContent {
        logo: "GIC",
        title: "GREAT INCOME CLUB",
        subtitle: "Decentralized Community Income \u{00B7} BNB Smart Chain",
        tagline: "Join Once for $5 \u{00B7} Earn Forever",
        stats: &[
            Stat {
                value: "$5",
                label: "Entry",
            },
            Stat {
                value: "4\u{00D7}",
                label: "Income",
            },
            Stat {
                value: "10",
                label: "Levels",
            },
            Stat {
                value: "70%",
                label: "Matrix",
            },
        ],
        footer: "Smart Contract \u{00B7} 100% Transparent \u{00B7} Instant Wallet Payments",
        streams_heading: "4 AUTOMATED INCOME STREAMS",
        streams: &[
            StreamCard {
                accent: GREEN,
                title: "Referral Income",
                description: "Earn instantly when someone joins using your referral link. \
                              Paid directly to your wallet \u{2014} no delays.",
            },
            StreamCard {
                accent: GOLD,
                title: "Matrix Income (70%)",
                description: "70% of every registration flows through your binary matrix. \
                              Earn from spillover even without personal referrals.",
            },
            StreamCard {
                accent: PURPLE,
                title: "Level Income",
                description: "Earn from 10 levels deep in your downline. The more your team \
                              grows, the more passive streams you receive.",
            },
            StreamCard {
                accent: ORANGE,
                title: "Global Reward Pools",
                description: "Upgrade levels to unlock a share of global reward pools. \
                              Higher level = larger pool share.",
            },
        ],
        matrix_heading: "Binary Matrix \u{2014} How Spillover Works",
        matrix_points: &[
            "Every member has a position in an infinite binary matrix (2 slots beneath each person).",
            "When both slots beneath you fill, you earn 70% of those fees \u{2014} automatically.",
            "Your upline can fill your matrix slots, so you earn passively without referring anyone.",
            "Upgrading unlocks deeper positions with larger payouts.",
        ],
        guide_heading: "HOW TO JOIN & FAQ",
        steps_heading: "Get Started in 4 Simple Steps",
        steps: &[
            Step {
                title: "Install Wallet",
                description: "Download MetaMask or Trust Wallet on your phone/browser.",
            },
            Step {
                title: "Add BNB",
                description: "Transfer ~$5.10 of BNB (entry $5 + ~$0.10 gas fee).",
            },
            Step {
                title: "Open the Link",
                description: "Tap your sponsor's referral link.",
            },
            Step {
                title: "Click Register",
                description: "Hit \"Register\" and confirm. You're in \u{2014} instantly!",
            },
        ],
        faq_heading: "Common Questions",
        faq: &[
            Faq {
                question: "Is GICLUB a scam?",
                answer: "No. It's a public smart contract on BSC \u{2014} every tx is visible on \
                         BscScan. No one controls your funds.",
            },
            Faq {
                question: "Do I need referrals?",
                answer: "No. Matrix spillover from your upline provides passive income. \
                         Referrals accelerate earnings.",
            },
            Faq {
                question: "When do I get paid?",
                answer: "Instantly \u{2014} BNB is sent directly to your wallet the moment someone \
                         in your matrix transacts.",
            },
            Faq {
                question: "Can I withdraw?",
                answer: "Nothing to withdraw \u{2014} income lands directly in your BSC wallet. \
                         It's already yours.",
            },
        ],
        cta_heading: "Join Your Sponsor's Team Now",
        cta_note: "One-time $5 entry \u{00B7} No monthly fees \u{00B7} Instant wallet payments",
    },
    flyer: FlyerContent {
        logo: "GIC",
        title: "GREAT INCOME CLUB",
        subtitle: "Decentralized \u{00B7} BNB Smart Chain \u{00B7} Smart Contract",
        hook: "Join Once for $5 \u{00B7} Earn 4 Ways",
        streams: &[
            FlyerLine {
                color: GREEN,
                text: "Referral Income \u{2014} Earn when you invite",
            },
            FlyerLine {
                color: GOLD,
                text: "Matrix Income (70%) \u{2014} Earn from everyone in your matrix",
            },
            FlyerLine {
                color: PURPLE,
                text: "Level Income \u{2014} Earn 10 levels deep",
            },
            FlyerLine {
                color: ORANGE,
                text: "Reward Pools \u{2014} Share global rewards on upgrade",
            },
        ],
        badges: &[
            "100% Smart Contract",
            "Instant Payments",
            "26 Languages",
            "Works on Any Wallet",
        ],
        cta_heading: "Join Now:",
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::win_ansi;

    fn all_strings(content: &PromoContent<'_>) -> Vec<String> {
        let b = &content.brochure;
        let f = &content.flyer;
        let mut out: Vec<String> = vec![
            b.logo, b.title, b.subtitle, b.tagline, b.footer, b.streams_heading,
            b.matrix_heading, b.guide_heading, b.steps_heading, b.faq_heading, b.cta_heading,
            b.cta_note, f.logo, f.title, f.subtitle, f.hook, f.cta_heading,
        ]
        .into_iter()
        .map(String::from)
        .collect();
        out.extend(b.stats.iter().flat_map(|s| [s.value.to_string(), s.label.to_string()]));
        out.extend(b.streams.iter().flat_map(|s| [s.title.to_string(), s.description.to_string()]));
        out.extend(b.matrix_points.iter().map(|s| s.to_string()));
        out.extend(b.steps.iter().flat_map(|s| [s.title.to_string(), s.description.to_string()]));
        out.extend(b.faq.iter().flat_map(|q| [q.question.to_string(), q.answer.to_string()]));
        out.extend(f.streams.iter().map(|l| l.text.to_string()));
        out.extend(f.badges.iter().map(|s| s.to_string()));
        out
    }

    #[test]
    fn test_fixed_table_sizes() {
        let b = &GICLUB.brochure;
        assert_eq!(b.stats.len(), 4);
        assert_eq!(b.streams.len(), 4);
        assert_eq!(b.matrix_points.len(), 4);
        assert_eq!(b.steps.len(), 4);
        assert_eq!(b.faq.len(), 4);
        assert_eq!(GICLUB.flyer.streams.len(), 4);
        assert_eq!(GICLUB.flyer.badges.len(), 4);
    }

    #[test]
    fn test_copy_is_winansi_encodable() {
        for text in all_strings(&GICLUB) {
            assert!(
                text.chars().all(|c| win_ansi::unicode_to_winansi(c).is_some()),
                "not encodable: {}",
                text
            );
        }
    }

    #[test]
    fn test_continuation_lines_have_single_spaces() {
        for text in all_strings(&GICLUB) {
            assert!(!text.contains("  "), "double space in: {}", text);
        }
    }
}
