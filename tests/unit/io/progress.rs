//! Tests for progress display coordination

#[cfg(test)]
mod tests {
    use std::path::Path;
    use tiltboard::io::progress::ProgressManager;

    // Tests a small batch runs the whole lifecycle without a batch bar
    #[test]
    fn test_small_batch_lifecycle() {
        let mut manager = ProgressManager::new();
        manager.initialize(2);

        manager.start_layout(Path::new("layouts/first.txt"), 100);
        manager.update_iteration(1, 4);
        manager.update_iteration(2, 1);
        manager.complete_layout(true);

        manager.start_layout(Path::new("layouts/second.txt"), 100);
        manager.update_iteration(1, 3);
        manager.complete_layout(false);

        manager.finish();
    }

    // Tests a large batch collapses to batch mode and still finishes cleanly
    #[test]
    fn test_large_batch_lifecycle() {
        let mut manager = ProgressManager::new();
        manager.initialize(50);

        for index in 0..50 {
            manager.start_layout(Path::new("layout.txt"), 10);
            manager.update_iteration(1, index);
            manager.complete_layout(index % 2 == 0);
        }

        manager.finish();
    }

    // Tests updates before any layout starts are harmless
    #[test]
    fn test_updates_without_an_active_layout_are_ignored() {
        let manager = ProgressManager::default();
        manager.update_iteration(1, 5);
        manager.finish();
    }
}
