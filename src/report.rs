// Console report formatting.
// Renders the summary banner and numbered user lists as plain text.

use std::fmt::Write;

use crate::analytics::Summary;
use crate::github::Member;

pub fn header(text: &str) -> String {
    format!("\n{}\n {}\n{}", "=".repeat(60), text, "=".repeat(60))
}

pub fn section(text: &str) -> String {
    format!("\n{}\n {}\n{}", "-".repeat(40), text, "-".repeat(40))
}

/// Numbered list of users, truncated to `max_display` entries.
pub fn format_user_list(users: &[Member], max_display: usize) -> String {
    if users.is_empty() {
        return "  None".to_string();
    }

    let mut out = String::new();
    for (i, user) in users.iter().take(max_display).enumerate() {
        let url = user.html_url.as_deref().unwrap_or_default();
        let _ = writeln!(out, "  {}. {} ({})", i + 1, user.login, url);
    }

    if users.len() > max_display {
        let _ = writeln!(out, "\n  ... and {} more not shown", users.len() - max_display);
    }

    out.trim_end().to_string()
}

pub fn format_summary(summary: &Summary) -> String {
    let mut out = header(&format!(
        "GITHUB FOLLOWER ANALYSIS FOR: {} ({})",
        summary.username, summary.name
    ));

    let join_date = summary.join_date.as_deref().unwrap_or("Unknown");

    let _ = write!(
        out,
        "\n\nAccount Stats:\
         \n  Followers:     {}\
         \n  Following:     {}\
         \n  Follow Ratio:  {:.2} (followers/following)\
         \n  Join Date:     {}\
         \n  Account Age:   {} days\
         \n  Public Repos:  {}",
        summary.total_followers,
        summary.total_following,
        summary.follow_ratio,
        join_date,
        summary.account_age_days,
        summary.public_repos,
    );

    let _ = write!(
        out,
        "\n\nFollow Analysis:\
         \n  Mutual Follows:          {} ({:.1}%)\
         \n  Not Following You Back:  {} ({:.1}%)\
         \n  You're Not Following:    {} ({:.1}%)",
        summary.mutual_count,
        summary.mutual_percentage,
        summary.not_following_back_count,
        summary.percent_not_following_back,
        summary.not_following_count,
        summary.percent_not_following,
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::FollowerAnalytics;
    use crate::github::Profile;

    fn users(n: usize) -> Vec<Member> {
        (0..n)
            .map(|i| {
                let mut m = Member::with_login(&format!("user{}", i));
                m.html_url = Some(format!("https://github.com/user{}", i));
                m
            })
            .collect()
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_user_list(&[], 10), "  None");
    }

    #[test]
    fn test_list_truncated() {
        let text = format_user_list(&users(12), 10);
        assert!(text.starts_with("  1. user0 (https://github.com/user0)"));
        assert!(text.contains("  10. user9 (https://github.com/user9)"));
        assert!(!text.contains("user10"));
        assert!(text.ends_with("... and 2 more not shown"));
    }

    #[test]
    fn test_list_missing_url() {
        let text = format_user_list(&[Member::with_login("ghost")], 10);
        assert_eq!(text, "  1. ghost ()");
    }

    #[test]
    fn test_summary_text() {
        let profile = Profile {
            login: Some("octocat".into()),
            name: Some("The Octocat".into()),
            ..Profile::default()
        };
        let followers = vec![Member::with_login("a"), Member::with_login("b")];
        let following = vec![Member::with_login("b"), Member::with_login("c")];
        let summary = FollowerAnalytics::new(&profile, &followers, &following).summarize();

        let text = format_summary(&summary);
        assert!(text.contains("GITHUB FOLLOWER ANALYSIS FOR: octocat (The Octocat)"));
        assert!(text.contains("Follow Ratio:  1.00 (followers/following)"));
        assert!(text.contains("Join Date:     Unknown"));
        assert!(text.contains("Mutual Follows:          1 (50.0%)"));
    }
}
