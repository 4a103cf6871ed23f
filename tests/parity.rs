use golrs_sparse::{
    advance, bounding_box, pos, render, run, Board, CellSet, ChunkedSet, Config, HashedSet, Pos,
    R_PENTOMINO,
};

fn sorted_changes<S: CellSet>(board: &Board<S>) -> Vec<(Pos, bool)> {
    let mut changes: Vec<_> = board
        .updates
        .iter()
        .map(|change| (change.pos, change.destiny == golrs_sparse::Destiny::Live))
        .collect();
    changes.sort_unstable();
    changes
}

#[test]
fn hashed_and_chunked_sets_agree() {
    let mut hashed: Board<HashedSet> = Board::seed(R_PENTOMINO);
    let mut chunked: Board<ChunkedSet> = Board::seed(R_PENTOMINO);
    for generation in 0..600 {
        hashed = advance(&hashed);
        chunked = advance(&chunked);
        assert_eq!(hashed.live.sorted(), chunked.live.sorted(), "live mismatch at {generation}");
        assert_eq!(hashed.population(), chunked.population());
        assert_eq!(
            sorted_changes(&hashed),
            sorted_changes(&chunked),
            "updates mismatch at {generation}"
        );
    }
    assert_eq!(bounding_box(&hashed.live), bounding_box(&chunked.live));
    assert_eq!(render(&hashed.live).unwrap(), render(&chunked.live).unwrap());
}

#[test]
fn glider_crosses_chunk_borders() {
    // travels one cell towards -x +y every four generations
    let glider = [pos!(0, 0), pos!(1, 0), pos!(2, 0), pos!(0, -1), pos!(1, -2)];
    let mut board: Board<ChunkedSet> = Board::start(glider);
    board = advance(&board);
    for _ in 0..(4 * 20) {
        board = advance(&board);
    }
    assert_eq!(board.population(), 5);
    let shifted: Vec<Pos> = {
        let mut cells: Vec<_> = glider.iter().map(|p| *p + pos!(-20, 20)).collect();
        cells.sort_unstable();
        cells
    };
    assert_eq!(board.live.sorted(), shifted);
}

#[test]
fn run_reports_every_pass() {
    let config = Config {
        show_work: false,
        generations: 50,
        runs: 2,
    };
    let reports = run::<ChunkedSet>(&config).unwrap();
    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|report| report.generations == 50));
    assert_eq!(reports[0].population, reports[1].population);
}

fn blinker_across_the_seam<S: CellSet>() {
    let horizontal = [pos!(i64::MAX - 1, 0), pos!(i64::MAX, 0), pos!(i64::MIN, 0)];
    let vertical = [pos!(i64::MAX, -1), pos!(i64::MAX, 0), pos!(i64::MAX, 1)];
    let sorted = |cells: &[Pos]| {
        let mut cells = cells.to_vec();
        cells.sort_unstable();
        cells
    };

    let first = advance(&Board::<S>::seed(horizontal));
    assert_eq!(first.live.sorted(), sorted(&horizontal));
    let second = advance(&first);
    assert_eq!(second.live.sorted(), sorted(&vertical));
    let third = advance(&second);
    assert_eq!(third.live.sorted(), sorted(&horizontal));
}

#[test]
fn cells_at_coordinate_bounds_step_without_overflow() {
    let pair = [pos!(i64::MAX, 0), pos!(i64::MAX, 1)];
    let hashed = advance(&advance(&Board::<HashedSet>::seed(pair)));
    let chunked = advance(&advance(&Board::<ChunkedSet>::seed(pair)));
    assert!(hashed.live.is_empty());
    assert!(chunked.live.is_empty());

    blinker_across_the_seam::<HashedSet>();
    blinker_across_the_seam::<ChunkedSet>();
}
