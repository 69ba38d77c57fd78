//! Example walking through a residency history and its eligibility report.
//!
//! Run with: `cargo run --example eligibility_report`

use chrono::NaiveDate;
use oas_residency::eligibility::{
    anniversary, evaluate, CitizenshipStatus, EligibilityConfig, EligibilityInput, PensionTier,
};
use oas_residency::parse::parse_periods;
use oas_residency::period::Interval;
use oas_residency::residency::IntervalSet;
use oas_residency::timeline::derive_timeline;

fn main() {
    println!("=== Residency & Eligibility Report ===\n");

    let history = "\
1976-1984
1986-03-01..1999-08-31
2001-01-15 to 2023-12-31
";

    // Parse and record the periods
    println!("--- Recording Periods ---");
    let mut set = IntervalSet::new();
    for interval in parse_periods(history).expect("demo history parses") {
        set = add_period(&set, interval);
    }

    // Try to add an overlapping period
    println!("\n--- Attempting to Add Overlapping Period ---");
    let overlapping = Interval::new(date(1990, 1, 1), date(1990, 6, 30)).unwrap();
    set = add_period(&set, overlapping);

    // Display the canonical timeline
    let timeline = derive_timeline(&set);
    println!("\n--- Timeline (in order) ---");
    for (i, period) in timeline.periods().iter().enumerate() {
        println!(
            "Period {}: {} ({} days)",
            i + 1,
            period.interval(),
            period.days(timeline.day_count())
        );
    }
    for gap in timeline.gaps() {
        println!("  {} ({} days)", gap, gap.days());
    }
    println!(
        "Recorded: {} days, gaps: {} days, span: {} days",
        timeline.total_days(),
        timeline.total_gap_days(),
        timeline.span_days()
    );

    // Evaluate
    let birth = date(1960, 7, 15);
    println!("\n--- Timeline After Age 18 ---");
    let adult = anniversary(birth, 18).expect("birth date in range");
    for interval in timeline.clipped_from(adult) {
        println!("{}", interval);
    }

    let input = EligibilityInput::new(birth, CitizenshipStatus::Citizen, date(2025, 10, 1));
    let result = evaluate(&input, &set);

    println!("\n--- Eligibility ---");
    println!("Age: {}", result.age_years);
    println!("Total days recorded: {}", result.total_days);
    println!(
        "Eligible days (after age 18): {} (~{:.2} years)",
        result.eligible_days_after_18,
        result.equivalent_years()
    );
    match result.pension_tier {
        PensionTier::Full => println!("Likely eligible for the full pension"),
        PensionTier::Partial => println!(
            "Likely eligible for a partial pension ({:.1}% of full amount, full at {} days)",
            result.pension_percentage(),
            EligibilityConfig::DEFAULT_FULL_PENSION_DAYS
        ),
        PensionTier::NotEligible => {
            println!("Not currently eligible:");
            for reason in &result.reasons {
                println!("  - {}", reason);
            }
        }
    }
}

fn add_period(set: &IntervalSet, interval: Interval) -> IntervalSet {
    match set.try_add(interval) {
        Ok(next) => {
            println!("✓ Added {}", interval);
            next
        }
        Err(e) => {
            println!("✗ {}", e);
            set.clone()
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
