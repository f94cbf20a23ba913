//! Notification command handlers, including the polling `watch` mode.

use std::collections::HashSet;
use std::time::Duration;

use owo_colors::OwoColorize;
use tabled::Tabled;

use frota_core::{
    Fleet, Notification, NotificationPriority, NotificationSummary, PageQuery,
};

use crate::cli::{GlobalOpts, NotificationsArgs, NotificationsCommand, OutputFormat};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct NotificationRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Read")]
    read: String,
    #[tabled(rename = "Created")]
    created: String,
}

impl From<&Notification> for NotificationRow {
    fn from(n: &Notification) -> Self {
        Self {
            id: n.id,
            priority: n.priority.to_string(),
            kind: n.kind.to_string(),
            title: n.title.clone(),
            read: if n.is_read { "yes" } else { "no" }.into(),
            created: n.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

impl From<&NotificationSummary> for NotificationRow {
    fn from(n: &NotificationSummary) -> Self {
        Self {
            id: n.id,
            priority: n.priority.to_string(),
            kind: n.kind.to_string(),
            title: n.title.clone(),
            read: if n.is_read { "yes" } else { "no" }.into(),
            created: n.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

fn notification_detail(n: &Notification) -> String {
    format!(
        "ID:       {}\n\
         Type:     {}\n\
         Priority: {}\n\
         Title:    {}\n\
         Message:  {}\n\
         Entity:   {}\n\
         Created:  {}\n\
         Read:     {}\n\
         Expires:  {}",
        n.id,
        n.kind,
        n.priority,
        n.title,
        n.message,
        match (&n.entity_type, n.entity_id) {
            (Some(t), Some(id)) => format!("{t} #{id}"),
            _ => "-".into(),
        },
        n.created_at.format("%Y-%m-%d %H:%M:%S"),
        n.read_at
            .map_or_else(|| "no".into(), |t| t.format("%Y-%m-%d %H:%M").to_string()),
        util::cell(n.expires_at.map(|t| t.format("%Y-%m-%d %H:%M").to_string())),
    )
}

// ── Handler ─────────────────────────────────────────────────────────

#[allow(clippy::too_many_lines)]
pub async fn handle(
    fleet: &Fleet,
    args: NotificationsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        NotificationsCommand::List { page } => {
            let query = PageQuery {
                page: page.page,
                size: page.size,
                sort_by: page.sort_by,
                sort_dir: page.sort_dir,
            };
            let result = fleet.notifications(&query).await?;
            let out = output::render_list(
                &global.output,
                &result.content,
                |x| NotificationRow::from(x),
                |n| n.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            if matches!(global.output, OutputFormat::Table) && !global.quiet {
                eprintln!(
                    "page {}/{} ({} total)",
                    result.number + 1,
                    result.total_pages.max(1),
                    result.total_elements
                );
            }
            Ok(())
        }

        NotificationsCommand::Unread {
            kind,
            priority,
            critical,
            high,
            page,
            size,
        } => {
            if let Some(page) = page {
                let result = fleet
                    .unread_notifications_paged(page, size.unwrap_or(10))
                    .await?;
                print_summaries(&result.content, global);
                if matches!(global.output, OutputFormat::Table) && !global.quiet {
                    eprintln!(
                        "page {}/{} ({} total)",
                        result.number + 1,
                        result.total_pages.max(1),
                        result.total_elements
                    );
                }
                return Ok(());
            }
            let summaries = if critical {
                fleet.critical_notifications().await?
            } else if high {
                fleet.high_priority_notifications().await?
            } else if let Some(ref raw) = kind {
                fleet
                    .notifications_by_type(util::parse_enum("type", raw)?)
                    .await?
            } else if let Some(ref raw) = priority {
                fleet
                    .notifications_by_priority(util::parse_enum("priority", raw)?)
                    .await?
            } else {
                fleet.unread_notifications().await?
            };
            print_summaries(&summaries, global);
            Ok(())
        }

        NotificationsCommand::Recent => {
            let summaries = fleet.recent_notifications().await?;
            print_summaries(&summaries, global);
            Ok(())
        }

        NotificationsCommand::Get { id } => {
            let notification = fleet.notification(id).await?;
            let out = output::render_single(
                &global.output,
                &notification,
                notification_detail,
                |n| n.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        NotificationsCommand::Read { id } => {
            let notification = fleet.mark_read(id).await?;
            if !global.quiet {
                eprintln!("Notification {} marked as read", notification.id);
            }
            Ok(())
        }

        NotificationsCommand::ReadAll => {
            fleet.mark_all_read().await?;
            if !global.quiet {
                eprintln!("All notifications marked as read");
            }
            Ok(())
        }

        NotificationsCommand::Delete { id } => {
            if !util::confirm(
                &format!("Delete notification {id}?"),
                "notifications delete",
                global.yes,
            )? {
                return Ok(());
            }
            fleet.remove_notification(id).await?;
            if !global.quiet {
                eprintln!("Notification {id} deleted");
            }
            Ok(())
        }

        NotificationsCommand::Count => {
            let count = fleet.unread_count().await?;
            output::print_output(&count.to_string(), global.quiet);
            Ok(())
        }

        NotificationsCommand::Stats => {
            let stats = fleet.notification_stats().await?;
            let out = output::render_single(
                &global.output,
                &stats,
                |s| {
                    format!(
                        "Total:         {}\n\
                         Unread:        {}\n\
                         Critical:      {}\n\
                         High priority: {}",
                        s.total_notifications, s.unread_count, s.critical_count,
                        s.high_priority_count
                    )
                },
                |s| s.unread_count.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        NotificationsCommand::CheckAlerts => {
            fleet.check_alerts().await?;
            if !global.quiet {
                eprintln!("Alert checks triggered");
            }
            Ok(())
        }

        NotificationsCommand::Watch { interval } => watch(fleet, interval, global).await,
    }
}

fn print_summaries(summaries: &[NotificationSummary], global: &GlobalOpts) {
    let out = output::render_list(&global.output, summaries, |x| NotificationRow::from(x), |n| {
        n.id.to_string()
    });
    output::print_output(&out, global.quiet);
}

// ── Watch mode ──────────────────────────────────────────────────────

/// Poll for unread notifications, printing each one once as it shows
/// up. Runs until Ctrl-C.
async fn watch(fleet: &Fleet, interval_secs: u64, global: &GlobalOpts) -> Result<(), CliError> {
    let notifier = fleet.notifier().clone();
    let mut feed_rx = notifier.subscribe();
    let mut seen: HashSet<i64> = HashSet::new();

    // Immediate first fetch; later ones come from the timer.
    notifier.refresh().await?;

    let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs.max(1)));
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    ticker.tick().await;

    if !global.quiet {
        eprintln!("Watching for notifications every {interval_secs}s (Ctrl-C to stop)");
    }

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,

            _ = ticker.tick() => {
                if let Err(e) = notifier.refresh().await {
                    tracing::warn!(error = %e, "notification fetch failed");
                }
            }

            changed = feed_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let feed = feed_rx.borrow_and_update().clone();
                for summary in &feed.unread {
                    if seen.insert(summary.id) {
                        println!("{}", format_line(summary, global));
                    }
                }
            }
        }
    }

    Ok(())
}

fn format_line(n: &NotificationSummary, global: &GlobalOpts) -> String {
    let stamp = n.created_at.format("%H:%M:%S");
    let tag = n.priority.to_string();
    let tag = if output::should_color(&global.color) {
        match n.priority {
            NotificationPriority::Critical => tag.red().bold().to_string(),
            NotificationPriority::High => tag.yellow().to_string(),
            _ => tag.dimmed().to_string(),
        }
    } else {
        tag
    };
    format!("{stamp} [{tag}] {} #{}: {}", n.kind, n.id, n.title)
}
