use {
  super::*,
  crate::config::SymmetryMode,
  rstest::rstest
};

fn grid(cols: u32, rows: u32, symmetry: SymmetryMode) -> GridConfig {
  GridConfig {
    cols,
    rows,
    cell_size: 20.0,
    offset_x: 3.0,
    offset_y: 7.0,
    symmetry,
    radial_count: 5
  }
}

#[test] fn single_cell_sits_at_center() {
  let g = GridConfig {
    cols: 1,
    rows: 1,
    cell_size: 100.0,
    offset_x: 0.0,
    offset_y: 0.0,
    symmetry: SymmetryMode::None,
    radial_count: 3
  };
  let cells = enumerate(&g).collect::<Vec<_>>();
  assert_eq!(cells.len(), 1);
  assert_eq!(cells[0].position, P2::new(50.0, 50.0));
  assert_eq!(cells[0].position, field::center(&g));
  assert_eq!(cells[0].distance, 0.0);
  assert!(cells[0].original);
}

#[test] fn row_major_order() {
  let g = grid(3, 2, SymmetryMode::None);
  let order = enumerate(&g).map(|c| (c.col, c.row)).collect::<Vec<_>>();
  assert_eq!(order, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
  let first = enumerate(&g).next().map(|c| c.position);
  assert_eq!(first, Some(P2::new(13.0, 17.0)));
}

#[test] fn symmetry_instances_follow_their_base_cell() {
  let g = grid(2, 2, SymmetryMode::Both);
  let cells = enumerate(&g).collect::<Vec<_>>();
  cells.chunks(4).zip([(0, 0), (1, 0), (0, 1), (1, 1)]).for_each(|(group, base)| {
    assert_eq!((group[0].col, group[0].row), base);
    assert!(group[0].original);
    assert!(group[1..].iter().all(|c| !c.original));
  });
}

#[rstest]
#[case(SymmetryMode::None)]
#[case(SymmetryMode::Horizontal)]
#[case(SymmetryMode::Vertical)]
#[case(SymmetryMode::Both)]
#[case(SymmetryMode::Radial)]
fn count_matches_config(#[case] symmetry: SymmetryMode) {
  for (cols, rows) in [(1, 1), (4, 3), (9, 1)] {
    let g = grid(cols, rows, symmetry);
    assert_eq!(enumerate(&g).count(), g.cell_count());
  }
}

#[test] fn restartable() {
  let g = grid(4, 4, SymmetryMode::Radial);
  let a = enumerate(&g).collect::<Vec<_>>();
  let b = enumerate(&g).collect::<Vec<_>>();
  assert_eq!(a, b);
}

#[test] fn empty_grid_is_empty() {
  assert_eq!(enumerate(&grid(0, 5, SymmetryMode::Both)).count(), 0);
  assert_eq!(enumerate(&grid(5, 0, SymmetryMode::None)).count(), 0);
}

#[test] fn distances_stay_in_unit_interval() {
  let g = grid(11, 6, SymmetryMode::Both);
  assert!(enumerate(&g).all(|c| (0.0..=1.0).contains(&c.distance)));
}
