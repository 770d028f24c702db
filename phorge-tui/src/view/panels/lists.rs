//! 列表类面板

use phorge_api::{
    BackupConfig, Certificate, Daemon, Database, DatabaseUser, Deployment, FirewallRule, ScheduledJob,
    Site, SiteCommand, SshKey, Worker,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row},
    Frame,
};

use crate::i18n::t;
use crate::model::detail::Panel;
use crate::view::theme::Styles;

use super::{opt, render_table, status_cell, time, yes_no};

/// 顶部一行快速部署状态，下面是部署历史
pub fn deployments(site: &Site, items: &[Deployment], panel: &Panel, frame: &mut Frame, area: Rect) {
    let c = &t().columns;
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    let summary = Line::from(vec![
        Span::styled(format!(" {}: ", t().fields.quick_deploy), Styles::muted()),
        Span::styled(yes_no(site.quick_deploy), Styles::text()),
        Span::styled(format!("   {}: ", t().fields.branch), Styles::muted()),
        Span::styled(opt(site.repository_branch.as_deref()), Styles::text()),
    ]);
    frame.render_widget(Paragraph::new(summary), layout[0]);

    let rows = items
        .iter()
        .map(|d| {
            Row::new([
                Cell::from(d.short_hash().to_string()),
                Cell::from(opt(d.commit_author.as_deref())),
                Cell::from(opt(d.commit_message.as_deref().and_then(|m| m.lines().next()))),
                Cell::from(time(d.started_at.as_ref())),
                status_cell(d.status.as_deref()),
            ])
        })
        .collect();

    render_table(
        frame,
        layout[1],
        panel,
        &[c.commit, c.author, c.message, c.started, c.status],
        &[
            Constraint::Length(8),
            Constraint::Length(16),
            Constraint::Min(20),
            Constraint::Length(16),
            Constraint::Length(10),
        ],
        rows,
    );
}

pub fn workers(items: &[Worker], panel: &Panel, frame: &mut Frame, area: Rect) {
    let c = &t().columns;
    let rows = items
        .iter()
        .map(|w| {
            Row::new([
                Cell::from(w.id.to_string()),
                Cell::from(opt(w.connection.as_deref())),
                Cell::from(opt(w.queue.as_deref())),
                Cell::from(w.processes.to_string()),
                Cell::from(format!("{}s", w.timeout)),
                status_cell(w.status.as_deref()),
            ])
        })
        .collect();

    render_table(
        frame,
        area,
        panel,
        &[c.id, c.connection, c.queue, c.processes, c.timeout, c.status],
        &[
            Constraint::Length(8),
            Constraint::Length(12),
            Constraint::Min(12),
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Length(10),
        ],
        rows,
    );
}

pub fn backups(items: &[BackupConfig], panel: &Panel, frame: &mut Frame, area: Rect) {
    let c = &t().columns;
    let rows = items
        .iter()
        .map(|b| {
            let last = b.last_backup();
            Row::new([
                Cell::from(b.id.to_string()),
                Cell::from(opt(b.provider.as_deref())),
                Cell::from(opt(b.frequency.as_deref())),
                Cell::from(b.databases.len().to_string()),
                Cell::from(time(last.and_then(|backup| backup.date.as_ref()))),
                status_cell(last.and_then(|backup| backup.status.as_deref())),
            ])
        })
        .collect();

    render_table(
        frame,
        area,
        panel,
        &[c.id, c.provider, c.frequency, c.databases, c.last_backup, c.status],
        &[
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(16),
            Constraint::Min(8),
        ],
        rows,
    );
}

pub fn databases(items: &[Database], panel: &Panel, frame: &mut Frame, area: Rect) {
    let c = &t().columns;
    let rows = items
        .iter()
        .map(|db| {
            Row::new([
                Cell::from(db.id.to_string()),
                Cell::from(db.name.clone()),
                Cell::from(yes_no(db.is_synced)),
                status_cell(db.status.as_deref()),
            ])
        })
        .collect();

    render_table(
        frame,
        area,
        panel,
        &[c.id, c.name, c.synced, c.status],
        &[
            Constraint::Length(8),
            Constraint::Min(16),
            Constraint::Length(8),
            Constraint::Length(10),
        ],
        rows,
    );
}

pub fn database_users(items: &[DatabaseUser], panel: &Panel, frame: &mut Frame, area: Rect) {
    let c = &t().columns;
    let rows = items
        .iter()
        .map(|user| {
            Row::new([
                Cell::from(user.id.to_string()),
                Cell::from(user.name.clone()),
                Cell::from(user.databases.len().to_string()),
                status_cell(user.status.as_deref()),
            ])
        })
        .collect();

    render_table(
        frame,
        area,
        panel,
        &[c.id, c.name, c.databases, c.status],
        &[
            Constraint::Length(8),
            Constraint::Min(16),
            Constraint::Length(10),
            Constraint::Length(10),
        ],
        rows,
    );
}

pub fn certificates(items: &[Certificate], panel: &Panel, frame: &mut Frame, area: Rect) {
    let c = &t().columns;
    let rows = items
        .iter()
        .map(|cert| {
            Row::new([
                Cell::from(cert.id.to_string()),
                Cell::from(opt(cert.domain.as_deref())),
                Cell::from(opt(cert.certificate_type.as_deref())),
                Cell::from(yes_no(cert.active)),
                status_cell(cert.status.as_deref()),
            ])
        })
        .collect();

    render_table(
        frame,
        area,
        panel,
        &[c.id, c.domain, c.kind, c.active, c.status],
        &[
            Constraint::Length(8),
            Constraint::Min(20),
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Length(10),
        ],
        rows,
    );
}

pub fn commands(items: &[SiteCommand], panel: &Panel, frame: &mut Frame, area: Rect) {
    let c = &t().columns;
    let rows = items
        .iter()
        .map(|cmd| {
            Row::new([
                Cell::from(cmd.command.clone()),
                Cell::from(opt(cmd.user_name.as_deref())),
                Cell::from(time(cmd.created_at.as_ref())),
                status_cell(cmd.status.as_deref()),
            ])
        })
        .collect();

    render_table(
        frame,
        area,
        panel,
        &[c.command, c.user, c.created, c.status],
        &[
            Constraint::Min(20),
            Constraint::Length(14),
            Constraint::Length(16),
            Constraint::Length(10),
        ],
        rows,
    );
}

pub fn ssh_keys(items: &[SshKey], panel: &Panel, frame: &mut Frame, area: Rect) {
    let c = &t().columns;
    let rows = items
        .iter()
        .map(|key| {
            Row::new([
                Cell::from(key.id.to_string()),
                Cell::from(key.name.clone()),
                status_cell(key.status.as_deref()),
            ])
        })
        .collect();

    render_table(
        frame,
        area,
        panel,
        &[c.id, c.name, c.status],
        &[Constraint::Length(8), Constraint::Min(16), Constraint::Length(10)],
        rows,
    );
}

pub fn daemons(items: &[Daemon], panel: &Panel, frame: &mut Frame, area: Rect) {
    let c = &t().columns;
    let rows = items
        .iter()
        .map(|daemon| {
            Row::new([
                Cell::from(daemon.command.clone()),
                Cell::from(opt(daemon.user.as_deref())),
                Cell::from(opt(daemon.directory.as_deref())),
                Cell::from(daemon.processes.to_string()),
                status_cell(daemon.status.as_deref()),
            ])
        })
        .collect();

    render_table(
        frame,
        area,
        panel,
        &[c.command, c.user, c.directory, c.processes, c.status],
        &[
            Constraint::Min(20),
            Constraint::Length(10),
            Constraint::Length(20),
            Constraint::Length(6),
            Constraint::Length(10),
        ],
        rows,
    );
}

pub fn firewall_rules(items: &[FirewallRule], panel: &Panel, frame: &mut Frame, area: Rect) {
    let c = &t().columns;
    let rows = items
        .iter()
        .map(|rule| {
            Row::new([
                Cell::from(rule.name.clone()),
                Cell::from(opt(rule.port.as_deref())),
                Cell::from(opt(rule.ip_address.as_deref())),
                Cell::from(opt(rule.rule_type.as_deref())),
                status_cell(rule.status.as_deref()),
            ])
        })
        .collect();

    render_table(
        frame,
        area,
        panel,
        &[c.name, c.port, c.ip, c.kind, c.status],
        &[
            Constraint::Min(16),
            Constraint::Length(10),
            Constraint::Length(16),
            Constraint::Length(8),
            Constraint::Length(10),
        ],
        rows,
    );
}

/// 自定义频率显示 cron 表达式
pub fn scheduled_jobs(items: &[ScheduledJob], panel: &Panel, frame: &mut Frame, area: Rect) {
    let c = &t().columns;
    let rows = items
        .iter()
        .map(|job| {
            let schedule = match (job.frequency.as_deref(), job.cron.as_deref()) {
                (Some("custom"), Some(cron)) | (None, Some(cron)) => cron.to_string(),
                (frequency, _) => opt(frequency),
            };
            Row::new([
                Cell::from(job.command.clone()),
                Cell::from(opt(job.user.as_deref())),
                Cell::from(schedule),
                status_cell(job.status.as_deref()),
            ])
        })
        .collect();

    render_table(
        frame,
        area,
        panel,
        &[c.command, c.user, c.schedule, c.status],
        &[
            Constraint::Min(20),
            Constraint::Length(10),
            Constraint::Length(16),
            Constraint::Length(10),
        ],
        rows,
    );
}
