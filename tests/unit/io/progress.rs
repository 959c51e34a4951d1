//! Tests for stage reporting and progress bookkeeping

#[cfg(test)]
mod tests {
    use retrodither::io::progress::{ProgressManager, Stage};
    use std::path::Path;

    // Tests stage positions advance monotonically up to the stage count
    #[test]
    fn test_stage_positions() {
        let stages = [Stage::Loading, Stage::Dithering, Stage::Writing, Stage::Done];
        let positions: Vec<u64> = stages.iter().map(|s| s.position()).collect();
        assert_eq!(positions, vec![0, 1, 2, Stage::COUNT]);
        assert_eq!(Stage::Done.label(), "done");
    }

    // Tests completed files are counted once they reach Done
    // Verified by counting Writing as complete
    #[test]
    fn test_completed_count() {
        let mut manager = ProgressManager::hidden();
        manager.initialize(3);

        manager.set_stage(0, Path::new("a.png"), Stage::Loading);
        manager.set_stage(0, Path::new("a.png"), Stage::Done);
        manager.set_stage(2, Path::new("c.png"), Stage::Writing);
        assert_eq!(manager.completed(), 1);

        manager.set_stage(2, Path::new("c.png"), Stage::Done);
        assert_eq!(manager.completed(), 2);
        manager.finish();
    }

    // Tests batches larger than the visible bar count are handled
    #[test]
    fn test_large_batch() {
        let mut manager = ProgressManager::hidden();
        manager.initialize(12);
        for index in 0..12 {
            let name = format!("{index}.png");
            manager.set_stage(index, Path::new(&name), Stage::Done);
        }
        assert_eq!(manager.completed(), 12);
        manager.finish();
    }
}
