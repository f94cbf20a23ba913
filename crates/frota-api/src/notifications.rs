// Notification endpoints
//
// Listing, read-state transitions, aggregate stats, and the manual
// alert sweep under /api/notifications.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{
    Notification, NotificationDraft, NotificationPriority, NotificationStats, NotificationSummary,
    NotificationType, Page, PageQuery,
};

impl ApiClient {
    /// List notifications, paged and sorted server-side.
    ///
    /// `GET /api/notifications?page=&size=&sortBy=&sortDir=`
    pub async fn list_notifications(
        &self,
        query: &PageQuery,
    ) -> Result<Page<Notification>, Error> {
        self.get_with_params("notifications", &query.as_params())
            .await
    }

    /// Fetch a single notification by id.
    ///
    /// `GET /api/notifications/{id}`
    pub async fn get_notification(&self, id: i64) -> Result<Notification, Error> {
        self.get(&format!("notifications/{id}")).await
    }

    /// Create a notification (operator-issued alerts).
    ///
    /// `POST /api/notifications`
    pub async fn create_notification(
        &self,
        draft: &NotificationDraft,
    ) -> Result<Notification, Error> {
        debug!(kind = %draft.kind, "creating notification");
        self.post("notifications", draft).await
    }

    /// Delete a notification.
    ///
    /// `DELETE /api/notifications/{id}`
    pub async fn delete_notification(&self, id: i64) -> Result<(), Error> {
        debug!(id, "deleting notification");
        self.delete(&format!("notifications/{id}")).await
    }

    /// Unread notifications, newest first.
    ///
    /// `GET /api/notifications/unread`
    pub async fn list_unread_notifications(&self) -> Result<Vec<NotificationSummary>, Error> {
        self.get("notifications/unread").await
    }

    /// Count of unread notifications (badge counter).
    ///
    /// `GET /api/notifications/unread/count`
    pub async fn unread_count(&self) -> Result<i64, Error> {
        self.get("notifications/unread/count").await
    }

    /// Unread notifications, paged.
    ///
    /// `GET /api/notifications/unread/paged?page=&size=`
    pub async fn list_unread_paged(
        &self,
        page: i32,
        size: i32,
    ) -> Result<Page<NotificationSummary>, Error> {
        self.get_with_params(
            "notifications/unread/paged",
            &[("page", page.to_string()), ("size", size.to_string())],
        )
        .await
    }

    /// Notifications of one type.
    ///
    /// `GET /api/notifications/type/{type}`
    pub async fn list_notifications_by_type(
        &self,
        kind: NotificationType,
    ) -> Result<Vec<NotificationSummary>, Error> {
        self.get(&format!("notifications/type/{kind}")).await
    }

    /// Notifications of one priority.
    ///
    /// `GET /api/notifications/priority/{priority}`
    pub async fn list_notifications_by_priority(
        &self,
        priority: NotificationPriority,
    ) -> Result<Vec<NotificationSummary>, Error> {
        self.get(&format!("notifications/priority/{priority}")).await
    }

    /// Unexpired critical notifications.
    ///
    /// `GET /api/notifications/critical`
    pub async fn list_critical_notifications(&self) -> Result<Vec<NotificationSummary>, Error> {
        self.get("notifications/critical").await
    }

    /// High and critical priority notifications.
    ///
    /// `GET /api/notifications/high-priority`
    pub async fn list_high_priority_notifications(
        &self,
    ) -> Result<Vec<NotificationSummary>, Error> {
        self.get("notifications/high-priority").await
    }

    /// Notifications created in the last 24 hours.
    ///
    /// `GET /api/notifications/recent`
    pub async fn list_recent_notifications(&self) -> Result<Vec<NotificationSummary>, Error> {
        self.get("notifications/recent").await
    }

    /// Mark one notification as read.
    ///
    /// `PATCH /api/notifications/{id}/read`
    pub async fn mark_notification_read(&self, id: i64) -> Result<Notification, Error> {
        debug!(id, "marking notification read");
        self.patch(&format!("notifications/{id}/read"), &serde_json::json!({}))
            .await
    }

    /// Mark every unread notification as read.
    ///
    /// `PATCH /api/notifications/read-all`
    pub async fn mark_all_notifications_read(&self) -> Result<(), Error> {
        debug!("marking all notifications read");
        self.patch_no_response("notifications/read-all", &serde_json::json!({}))
            .await
    }

    /// Aggregate unread/critical counters.
    ///
    /// `GET /api/notifications/stats`
    pub async fn notification_stats(&self) -> Result<NotificationStats, Error> {
        self.get("notifications/stats").await
    }

    /// Ask the backend to sweep for alert conditions now.
    ///
    /// `POST /api/notifications/check-alerts`
    pub async fn check_alerts(&self) -> Result<(), Error> {
        debug!("forcing alert sweep");
        self.post_no_response("notifications/check-alerts", &serde_json::json!({}))
            .await
    }
}
