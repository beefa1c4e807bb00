use proptest::prelude::*;
use race_core::movement::{self, Direction};
use race_core::traversal::{self, Traversal};
use race_core::{CellKind, Displacement, Grid, Position};

fn any_direction() -> impl Strategy<Value = Direction> {
    proptest::sample::select(Direction::ALL.to_vec())
}

fn any_kind() -> impl Strategy<Value = CellKind> {
    prop_oneof![
        Just(CellKind::Track),
        Just(CellKind::Start),
        Just(CellKind::Finish),
        Just(CellKind::HazardOfftrack),
        Just(CellKind::Slick),
    ]
}

fn any_grid() -> impl Strategy<Value = Grid> {
    (1u32..8, 1u32..8).prop_flat_map(|(width, height)| {
        proptest::collection::vec(any_kind(), (width * height) as usize)
            .prop_map(move |kinds| Grid::new(width, height, kinds).unwrap())
    })
}

proptest! {
    #[test]
    fn next_displacement_adds_the_unit_vector(
        dx in -50i32..50,
        dy in -50i32..50,
        direction in any_direction(),
    ) {
        let unit = direction.unit();
        let next = movement::next_displacement(Displacement::new(dx, dy), direction);
        prop_assert_eq!(next, Displacement::new(dx + unit.dx, dy + unit.dy));
        prop_assert!(unit.dx.abs() <= 1 && unit.dy.abs() <= 1);
    }

    #[test]
    fn candidates_surround_the_center(
        x in -20i32..20,
        y in -20i32..20,
        dx in -5i32..5,
        dy in -5i32..5,
        direction in any_direction(),
    ) {
        let position = Position::new(x, y);
        let last = Displacement::new(dx, dy);
        let target = movement::next_position(position, last, direction);
        prop_assert_eq!(target - movement::center(position, last), direction.unit());
    }

    #[test]
    fn moving_in_place_is_always_normal(grid in any_grid(), x in 0i32..8, y in 0i32..8) {
        let here = Position::new(x, y);
        prop_assert_eq!(traversal::classify(&grid, here, here), Traversal::Normal);
    }

    #[test]
    fn paths_step_one_cell_at_a_time_x_first(
        fx in -10i32..10,
        fy in -10i32..10,
        tx in -10i32..10,
        ty in -10i32..10,
    ) {
        let from = Position::new(fx, fy);
        let to = Position::new(tx, ty);
        let steps: Vec<Position> = traversal::path(from, to).collect();

        let manhattan = ((tx - fx).abs() + (ty - fy).abs()) as usize;
        prop_assert_eq!(steps.len(), manhattan);
        prop_assert_eq!(steps.last().copied().unwrap_or(from), to);

        let mut previous = from;
        let mut y_started = false;
        for step in steps {
            let delta = step - previous;
            prop_assert_eq!(delta.dx.abs() + delta.dy.abs(), 1);
            if delta.dy != 0 {
                y_started = true;
            }
            prop_assert!(!(y_started && delta.dx != 0));
            previous = step;
        }
    }

    #[test]
    fn classification_reports_the_first_terminal_cell(
        grid in any_grid(),
        fx in 0i32..8,
        fy in 0i32..8,
        tx in -2i32..10,
        ty in -2i32..10,
    ) {
        let from = Position::new(fx, fy);
        let to = Position::new(tx, ty);
        let first_terminal = traversal::path(from, to)
            .find(|&step| grid.kind(step).is_none_or(CellKind::is_terminal));

        let expected = match first_terminal {
            None => Traversal::Normal,
            Some(at) if grid.kind(at) == Some(CellKind::Finish) => Traversal::Finished { at },
            Some(at) => Traversal::Crashed { at },
        };
        prop_assert_eq!(traversal::classify(&grid, from, to), expected);
    }
}
