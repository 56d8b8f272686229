use std::time::Duration;

use super::Acknowledgment;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
}

/// Notifications waiting to be shown. Only the newest `LIMIT` are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub const LIMIT: usize = 1;
    pub const DISMISS_AFTER: Duration = Duration::from_secs(5);

    pub fn push(&mut self, ack: Acknowledgment) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.insert(
            0,
            Toast {
                id,
                title: ack.title.to_string(),
                description: ack.description.to_string(),
            },
        );
        self.toasts.truncate(Self::LIMIT);
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut queue = ToastQueue::default();
        let id = queue.push(Acknowledgment::SENT);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].title, "Message sent!");

        queue.dismiss(id + 1);
        assert_eq!(queue.toasts().len(), 1);
        queue.dismiss(id);
        assert!(queue.toasts().is_empty());
    }

    #[test]
    fn test_newest_wins() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Acknowledgment::SENT);
        let second = queue.push(Acknowledgment::SENT);
        assert!(second > first);
        assert_eq!(queue.toasts().len(), ToastQueue::LIMIT);
        assert_eq!(queue.toasts()[0].id, second);
        // dismissing an evicted toast is harmless
        queue.dismiss(first);
        assert_eq!(queue.toasts()[0].id, second);
    }
}
