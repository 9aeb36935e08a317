//! Tests for argument parsing, scrambling, and the layout runner

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::io::Write;
    use std::path::PathBuf;
    use tiltboard::engine::puzzle::Puzzle;
    use tiltboard::io::cli::{Cli, LayoutRunner, scramble};
    use tiltboard::io::configuration::{DEFAULT_MAX_AUTO_TILTS, DEFAULT_SEED};
    use tiltboard::io::error::PuzzleError;

    fn puzzle(starting: &[&str], ending: &[&str]) -> Puzzle {
        match Puzzle::from_symbols(starting, ending) {
            Ok(puzzle) => puzzle,
            Err(_) => unreachable!(),
        }
    }

    // Tests the target argument is required and defaults hold elsewhere
    #[test]
    fn test_defaults_apply_when_only_target_is_given() {
        let cli = Cli::try_parse_from(["tiltboard", "layouts"]);
        assert!(cli.is_ok());
        if let Ok(cli) = cli {
            assert_eq!(cli.target, PathBuf::from("layouts"));
            assert_eq!(cli.moves, None);
            assert_eq!(cli.scramble, 0);
            assert_eq!(cli.seed, DEFAULT_SEED);
            assert!(!cli.auto);
            assert_eq!(cli.iterations, DEFAULT_MAX_AUTO_TILTS);
            assert!(!cli.export);
            assert!(!cli.quiet);
            assert!(cli.should_show_progress());
        }
        assert!(Cli::try_parse_from(["tiltboard"]).is_err());
    }

    // Tests every flag parses through its short form
    #[test]
    fn test_short_flags_parse() {
        let cli = Cli::try_parse_from([
            "tiltboard", "board.txt", "-m", "llur", "-n", "12", "-s", "7", "-a", "-i", "50",
            "-e", "-q",
        ]);
        assert!(cli.is_ok());
        if let Ok(cli) = cli {
            assert_eq!(cli.moves.as_deref(), Some("llur"));
            assert_eq!(cli.scramble, 12);
            assert_eq!(cli.seed, 7);
            assert!(cli.auto);
            assert_eq!(cli.iterations, 50);
            assert!(cli.export);
            assert!(cli.quiet);
            assert!(!cli.should_show_progress());
        }
    }

    // Tests the same seed reproduces the same scrambled board
    #[test]
    fn test_scramble_is_reproducible_per_seed() {
        let starting = ["rb..", ".gy.", "....", "b..r"];
        let ending = ["....", "....", "....", "...."];
        let mut first = puzzle(&starting, &ending);
        let mut second = puzzle(&starting, &ending);

        scramble(&mut first, 10, 99);
        scramble(&mut second, 10, 99);
        assert_eq!(
            first.snapshot().symbol_rows(),
            second.snapshot().symbol_rows()
        );

        let mut reseeded = puzzle(&starting, &ending);
        scramble(&mut reseeded, 0, 99);
        assert_eq!(
            reseeded.snapshot().symbol_rows(),
            starting,
            "a zero-tilt scramble must not move anything"
        );
    }

    // Tests a quiet run over a single layout file succeeds end to end
    #[test]
    fn test_runner_processes_a_single_layout_file() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!()
        };
        let path = dir.path().join("solve_me.txt");
        let written = std::fs::File::create(&path)
            .and_then(|mut file| file.write_all(b"rg.\n\n.rg\n"));
        assert!(written.is_ok());

        let target = path.to_string_lossy().to_string();
        let cli = Cli::try_parse_from(["tiltboard", target.as_str(), "-a", "-q"]);
        assert!(cli.is_ok());
        if let Ok(cli) = cli {
            assert!(LayoutRunner::new(cli).process().is_ok());
        }
    }

    // Tests a directory target picks up its .txt layouts
    #[test]
    fn test_runner_processes_a_layout_directory() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!()
        };
        for (name, text) in [("a.txt", "r.\n\n.r\n"), ("b.txt", "b.\n\n.b\n")] {
            let written = std::fs::File::create(dir.path().join(name))
                .and_then(|mut file| file.write_all(text.as_bytes()));
            assert!(written.is_ok());
        }
        let ignored = std::fs::File::create(dir.path().join("notes.md"))
            .and_then(|mut file| file.write_all(b"not a layout"));
        assert!(ignored.is_ok());

        let target = dir.path().to_string_lossy().to_string();
        let cli = Cli::try_parse_from(["tiltboard", target.as_str(), "-m", "r", "-q"]);
        assert!(cli.is_ok());
        if let Ok(cli) = cli {
            assert!(LayoutRunner::new(cli).process().is_ok());
        }
    }

    // Tests a nonexistent target is rejected before any work happens
    #[test]
    fn test_runner_rejects_a_missing_target() {
        let cli = Cli::try_parse_from(["tiltboard", "no/such/target", "-q"]);
        assert!(cli.is_ok());
        if let Ok(cli) = cli {
            assert!(matches!(
                LayoutRunner::new(cli).process(),
                Err(PuzzleError::InvalidParameter { .. })
            ));
        }
    }

    // Tests exported renders land next to the layout with the output suffix
    #[test]
    fn test_runner_exports_a_png_next_to_the_layout() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!()
        };
        let path = dir.path().join("render_me.txt");
        let written = std::fs::File::create(&path)
            .and_then(|mut file| file.write_all(b"rb\n\nbr\n"));
        assert!(written.is_ok());

        let target = path.to_string_lossy().to_string();
        let cli = Cli::try_parse_from(["tiltboard", target.as_str(), "-e", "-q"]);
        assert!(cli.is_ok());
        if let Ok(cli) = cli {
            assert!(LayoutRunner::new(cli).process().is_ok());
        }
        assert!(
            dir.path().join("render_me_board.png").exists(),
            "the export should sit next to its layout"
        );
    }
}
