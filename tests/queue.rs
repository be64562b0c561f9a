#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};
    use traq::libs::queue::{ItemStatus, WorkQueue};

    fn queue_with(paths: &[&str]) -> WorkQueue {
        let mut queue = WorkQueue::new();
        for path in paths {
            queue.add(*path);
        }
        queue
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut queue = WorkQueue::new();
        let a = queue.add("/jobs/0034_JH/a.indd");
        let b = queue.add("/jobs/0034_JH/b.indd");
        assert_ne!(a, b);
        assert_eq!(queue.items().len(), 2);
        assert!(queue.items().iter().all(|item| item.status == ItemStatus::Queued));
    }

    #[test]
    fn test_start_requires_opened_or_paused() {
        let mut queue = queue_with(&["/jobs/a.indd"]);
        let id = queue.items()[0].id;
        let t0 = Instant::now();

        // Still Queued: start must be refused.
        queue.start_at(id, t0);
        assert_eq!(queue.items()[0].status, ItemStatus::Queued);
        assert!(queue.current_item().is_none());

        queue.mark_opened(id);
        queue.start_at(id, t0);
        assert_eq!(queue.items()[0].status, ItemStatus::Active);
        assert_eq!(queue.current_item().map(|item| item.id), Some(id));
    }

    #[test]
    fn test_single_running_item_on_preemption() {
        let mut queue = queue_with(&["/jobs/a.indd", "/jobs/b.indd"]);
        let (a, b) = (queue.items()[0].id, queue.items()[1].id);
        queue.mark_opened(a);
        queue.mark_opened(b);

        let t0 = Instant::now();
        queue.start_at(a, t0);
        queue.start_at(b, t0 + Duration::from_secs(30));

        let running: Vec<_> = queue.items().iter().filter(|item| item.is_running()).collect();
        assert_eq!(running.len(), 1);
        assert_eq!(running[0].id, b);
        assert_eq!(queue.get(a).unwrap().status, ItemStatus::Paused);
    }

    #[test]
    fn test_preemption_conserves_elapsed_time() {
        let mut queue = queue_with(&["/jobs/a.indd", "/jobs/b.indd"]);
        let (a, b) = (queue.items()[0].id, queue.items()[1].id);
        queue.mark_opened(a);
        queue.mark_opened(b);

        let t0 = Instant::now();
        queue.start_at(a, t0);
        queue.start_at(b, t0 + Duration::from_secs(30));
        queue.start_at(a, t0 + Duration::from_secs(60));
        queue.pause_at(a, t0 + Duration::from_secs(90));

        // A ran 0-30 and 60-90, B ran 30-60. Nothing lost, nothing doubled.
        assert_eq!(queue.get(a).unwrap().elapsed(), Duration::from_secs(60));
        assert_eq!(queue.get(b).unwrap().elapsed(), Duration::from_secs(30));
    }

    #[test]
    fn test_live_elapsed_is_observational() {
        let mut queue = queue_with(&["/jobs/a.indd"]);
        let id = queue.items()[0].id;
        queue.mark_opened(id);
        let t0 = Instant::now();
        queue.start_at(id, t0);

        let t45 = t0 + Duration::from_secs(45);
        assert_eq!(queue.get(id).unwrap().live_elapsed(t45), Duration::from_secs(45));
        // A second read at the same instant returns the same value; reading
        // never folds time into the accumulated total.
        assert_eq!(queue.get(id).unwrap().live_elapsed(t45), Duration::from_secs(45));
        assert_eq!(queue.get(id).unwrap().elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_pause_folds_and_counts() {
        let mut queue = queue_with(&["/jobs/a.indd"]);
        let id = queue.items()[0].id;
        queue.mark_opened(id);
        let t0 = Instant::now();

        queue.start_at(id, t0);
        queue.pause_at(id, t0 + Duration::from_secs(20));

        let item = queue.get(id).unwrap();
        assert_eq!(item.status, ItemStatus::Paused);
        assert_eq!(item.elapsed(), Duration::from_secs(20));
        assert_eq!(item.pause_count, 1);

        // Paused items accrue nothing.
        assert_eq!(item.live_elapsed(t0 + Duration::from_secs(120)), Duration::from_secs(20));
    }

    #[test]
    fn test_pause_only_applies_to_running_current() {
        let mut queue = queue_with(&["/jobs/a.indd"]);
        let id = queue.items()[0].id;
        queue.mark_opened(id);
        let t0 = Instant::now();
        queue.start_at(id, t0);
        queue.pause_at(id, t0 + Duration::from_secs(10));

        // Second pause on an already paused item changes nothing.
        queue.pause_at(id, t0 + Duration::from_secs(20));
        let item = queue.get(id).unwrap();
        assert_eq!(item.pause_count, 1);
        assert_eq!(item.elapsed(), Duration::from_secs(10));
    }

    #[test]
    fn test_resume_continues_accrual() {
        let mut queue = queue_with(&["/jobs/a.indd"]);
        let id = queue.items()[0].id;
        queue.mark_opened(id);
        let t0 = Instant::now();

        queue.start_at(id, t0);
        queue.pause_at(id, t0 + Duration::from_secs(30));
        queue.resume_at(id, t0 + Duration::from_secs(100));
        queue.pause_at(id, t0 + Duration::from_secs(130));

        // 30s before the pause plus 30s after the resume; the 70s gap is not
        // charged.
        assert_eq!(queue.get(id).unwrap().elapsed(), Duration::from_secs(60));
        assert_eq!(queue.get(id).unwrap().pause_count, 2);
    }

    #[test]
    fn test_toggle_pause_round_trip() {
        let mut queue = queue_with(&["/jobs/a.indd"]);
        let id = queue.items()[0].id;
        queue.mark_opened(id);
        let t0 = Instant::now();

        queue.start_at(id, t0);
        queue.toggle_pause_at(id, t0 + Duration::from_secs(5));
        assert_eq!(queue.get(id).unwrap().status, ItemStatus::Paused);
        queue.toggle_pause_at(id, t0 + Duration::from_secs(10));
        assert_eq!(queue.get(id).unwrap().status, ItemStatus::Active);
    }

    #[test]
    fn test_complete_freezes_item() {
        let mut queue = queue_with(&["/jobs/a.indd"]);
        let id = queue.items()[0].id;
        queue.mark_opened(id);
        let t0 = Instant::now();

        queue.start_at(id, t0);
        assert!(queue.complete_at(id, t0 + Duration::from_secs(42)));

        let item = queue.get(id).unwrap();
        assert_eq!(item.status, ItemStatus::Completed);
        assert_eq!(item.elapsed(), Duration::from_secs(42));
        assert!(item.completed_at.is_some());
        assert!(queue.current_item().is_none());

        // Completed is terminal: no re-complete, no restart, no new time.
        assert!(!queue.complete_at(id, t0 + Duration::from_secs(100)));
        queue.start_at(id, t0 + Duration::from_secs(100));
        assert_eq!(queue.get(id).unwrap().status, ItemStatus::Completed);
        assert_eq!(queue.get(id).unwrap().elapsed(), Duration::from_secs(42));
    }

    #[test]
    fn test_idle_attribution_frozen_after_complete() {
        let mut queue = queue_with(&["/jobs/a.indd"]);
        let id = queue.items()[0].id;
        queue.mark_opened(id);
        let t0 = Instant::now();
        queue.start_at(id, t0);

        // Stamped while running, frozen once completed.
        queue.attribute_idle(id, 35);
        queue.complete_at(id, t0 + Duration::from_secs(60));
        queue.attribute_idle(id, 42);
        assert_eq!(queue.get(id).unwrap().idle_seconds, 35);
    }

    #[test]
    fn test_all_completed() {
        let mut queue = queue_with(&["/jobs/a.indd", "/jobs/b.indd"]);
        let (a, b) = (queue.items()[0].id, queue.items()[1].id);
        assert!(!queue.all_completed());

        let t0 = Instant::now();
        queue.complete_at(a, t0);
        assert!(!queue.all_completed());
        queue.complete_at(b, t0);
        assert!(queue.all_completed());
        assert_eq!(queue.remaining_count(), 0);
    }

    #[test]
    fn test_remove_repoints_current_index() {
        let mut queue = queue_with(&["/jobs/a.indd", "/jobs/b.indd", "/jobs/c.indd"]);
        let (a, _b, c) = (queue.items()[0].id, queue.items()[1].id, queue.items()[2].id);
        queue.mark_opened(c);
        queue.start_at(c, Instant::now());
        assert_eq!(queue.current_index(), Some(2));

        queue.remove(a);
        assert_eq!(queue.current_index(), Some(1));
        assert_eq!(queue.current_item().map(|item| item.id), Some(c));
    }

    #[test]
    fn test_remove_current_clears_pointer() {
        let mut queue = queue_with(&["/jobs/a.indd", "/jobs/b.indd"]);
        let a = queue.items()[0].id;
        queue.mark_opened(a);
        queue.start_at(a, Instant::now());

        queue.remove(a);
        assert!(queue.current_item().is_none());
        assert_eq!(queue.items().len(), 1);
    }

    #[test]
    fn test_active_info_tracks_pause_state() {
        let mut queue = queue_with(&["/jobs/0034_JH/brochure.indd"]);
        let id = queue.items()[0].id;
        queue.mark_opened(id);
        let t0 = Instant::now();

        queue.start_at(id, t0);
        let info = queue.active_info_at(t0 + Duration::from_secs(95)).unwrap();
        assert!(!info.paused);
        assert_eq!(info.timer, "01:35");
        assert!(info.display.contains("brochure.indd"));

        queue.pause_at(id, t0 + Duration::from_secs(95));
        let info = queue.active_info_at(t0 + Duration::from_secs(200)).unwrap();
        assert!(info.paused);
        assert_eq!(info.timer, "01:35");
    }

    #[test]
    fn test_display_text_truncates_long_names() {
        let mut queue = WorkQueue::new();
        let id = queue.add("/jobs/0034_JH/a_very_long_layered_production_filename.indd");
        let display = queue.get(id).unwrap().display_text();
        assert!(display.starts_with("0034_JH - "));
        assert!(display.ends_with("..."));
    }
}
