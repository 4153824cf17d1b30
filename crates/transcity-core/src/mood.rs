//! Mood and motto classification.
//!
//! The hero block shows one short mood line and one piece of advice. They
//! are picked by an ordered rule table: the first rule whose condition
//! holds wins, and [`DEFAULT_MOOD`] applies when none do. New rules slot
//! into [`MOOD_RULES`] at the priority they need.

use rust_decimal::Decimal;
use transcity_types::Player;

/// Financial standing shown on the hero block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    /// Overdue debt.
    TaxAuthorityWatching,
    /// Tax owed but no debt yet.
    TaxTimerTicking,
    /// More money in the bank than in the wallet.
    DepositGrowing,
    /// Nothing to worry about.
    BalanceUnderControl,
}

impl Mood {
    /// The mood line.
    pub const fn headline(self) -> &'static str {
        match self {
            Self::TaxAuthorityWatching => "The tax authority is watching.",
            Self::TaxTimerTicking => "The tax timer is already ticking.",
            Self::DepositGrowing => "Your deposit is growing faster than your wallet.",
            Self::BalanceUnderControl => "Balance under control, time to relax.",
        }
    }

    /// The advice paired with the mood.
    pub const fn motto(self) -> &'static str {
        match self {
            Self::TaxAuthorityWatching => {
                "Close the debt or the bot will seize your deposit and assets."
            }
            Self::TaxTimerTicking => "Pay the bill so your businesses don't get locked.",
            Self::DepositGrowing => "Treat yourself to an upgrade while the rate is +5%.",
            Self::BalanceUnderControl => "Collect your profits and get ready for the holidays.",
        }
    }
}

/// Figures the mood rules look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodInputs {
    /// Outstanding debt.
    pub debt: i64,
    /// Tax currently owed.
    pub tax_balance: Decimal,
    /// Cash on hand.
    pub wallet: i64,
    /// Bank deposit.
    pub bank: i64,
}

impl MoodInputs {
    /// Gather inputs from a player and their tax balance.
    pub const fn from_player(player: &Player, tax_balance: Decimal) -> Self {
        Self {
            debt: player.debt,
            tax_balance,
            wallet: player.wallet,
            bank: player.bank,
        }
    }
}

/// One row of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct MoodRule {
    /// Mood chosen when the condition holds.
    pub mood: Mood,
    /// The condition.
    pub applies: fn(&MoodInputs) -> bool,
}

const fn has_debt(inputs: &MoodInputs) -> bool {
    inputs.debt > 0
}

fn owes_tax(inputs: &MoodInputs) -> bool {
    inputs.tax_balance > Decimal::ZERO
}

const fn bank_exceeds_wallet(inputs: &MoodInputs) -> bool {
    inputs.bank > inputs.wallet
}

/// Rules in priority order.
pub const MOOD_RULES: [MoodRule; 3] = [
    MoodRule {
        mood: Mood::TaxAuthorityWatching,
        applies: has_debt,
    },
    MoodRule {
        mood: Mood::TaxTimerTicking,
        applies: owes_tax,
    },
    MoodRule {
        mood: Mood::DepositGrowing,
        applies: bank_exceeds_wallet,
    },
];

/// Mood when no rule applies.
pub const DEFAULT_MOOD: Mood = Mood::BalanceUnderControl;

/// Pick the mood for `inputs`.
pub fn classify(inputs: &MoodInputs) -> Mood {
    MOOD_RULES
        .iter()
        .find(|rule| (rule.applies)(inputs))
        .map_or(DEFAULT_MOOD, |rule| rule.mood)
}
