#![allow(dead_code)]

use campaign_calendar::schedule::{CalendarMonth, Category, ScheduledItem};
use chrono::NaiveDate;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn month(y: i32, m: u32) -> CalendarMonth {
    CalendarMonth::new(y, m).expect("valid month")
}

/// A small mixed snapshot resembling a marketing team's March plan.
pub fn march_plan() -> Vec<ScheduledItem> {
    vec![
        ScheduledItem::new("s-1", "Spring Launch")
            .with_description("Creator collab for the new collection")
            .scheduled(date(2024, 3, 5), Some(date(2024, 3, 8)))
            .with_category(Category::Influencer)
            .with_budget(10_000)
            .with_reach(1_200_000)
            .with_tags(["instagram", "tiktok"]),
        ScheduledItem::new("s-2", "Newsletter")
            .scheduled(date(2024, 3, 5), None)
            .with_category(Category::Email)
            .with_budget(25_000)
            .with_reach(40_000),
        ScheduledItem::new("f-1", "Campus flyers")
            .scheduled(date(2024, 3, 30), Some(date(2024, 4, 2)))
            .with_category(Category::Flyer)
            .with_budget(7_500)
            .with_tags(["print"]),
        ScheduledItem::new("s-3", "Podcast ads")
            .scheduled(date(2024, 2, 26), Some(date(2024, 3, 3)))
            .with_category(Category::PaidAds)
            .with_budget(50_000)
            .with_reach(300_000)
            .with_tags(["spotify"]),
        ScheduledItem::new("s-4", "Summer teaser").with_category(Category::Content),
    ]
}
