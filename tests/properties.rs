use crossdock_routes::distance::CostTable;
use crossdock_routes::evaluation::RouteAggregator;
use crossdock_routes::input::{read_instance, read_result};
use crossdock_routes::models::{Edge, Position, Positions, RoutePlan};
use proptest::prelude::*;

fn positions_strategy() -> impl Strategy<Value = Positions> {
    prop::collection::btree_map(1u32..40, (-1000i64..1000, -1000i64..1000), 1..20).prop_map(
        |map| {
            map.into_iter()
                .map(|(id, (x, y))| (id, Position::new(x, y)))
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn role_ranges_cover_contiguous_ids(n_suppliers in 0u32..50, n_consumers in 0u32..50) {
        let table = format!("{},{}\n", n_suppliers, n_consumers);
        let inst = read_instance(table.as_bytes(), "prop.csv").unwrap();

        let mut ids: Vec<u32> = inst.suppliers().chain(inst.consumers()).collect();
        ids.push(inst.cross_dock());
        let expected: Vec<u32> = (1..=n_suppliers + n_consumers + 1).collect();
        prop_assert_eq!(ids, expected);
        prop_assert_eq!(inst.cross_dock(), n_suppliers + n_consumers + 1);
    }

    #[test]
    fn cost_table_zero_diagonal_and_symmetric(positions in positions_strategy()) {
        let costs = CostTable::from_positions(&positions);
        prop_assert_eq!(costs.size(), positions.len());
        for i in positions.ids() {
            prop_assert_eq!(costs.cost(i, i), Some(0.0));
            for j in positions.ids() {
                prop_assert_eq!(costs.cost(i, j), costs.cost(j, i));
            }
        }
    }

    #[test]
    fn aggregate_total_matches_flattened_sum(
        positions in positions_strategy(),
        picks in prop::collection::vec((0usize..3, any::<prop::sample::Index>(), any::<prop::sample::Index>()), 0..30),
    ) {
        let ids: Vec<u32> = positions.ids().collect();
        let costs = CostTable::from_positions(&positions);

        let mut plan = RoutePlan::new();
        for (owner, a, b) in &picks {
            plan.push(*owner as u32, Edge::new(*a.get(&ids), *b.get(&ids)));
        }

        let report = RouteAggregator::new(&costs).aggregate(&plan).unwrap();
        let flat: f64 = report
            .flattened_edges()
            .iter()
            .map(|e| costs.cost(e.from, e.to).unwrap())
            .sum();
        prop_assert!((flat - report.total()).abs() < 1e-6);
        prop_assert_eq!(report.flattened_edges().len(), picks.len());
    }

    #[test]
    fn result_reader_keeps_order_and_skips_short_lines(
        edges in prop::collection::vec((0u32..5, 0u32..100, 0u32..100), 0..40),
        noise in prop::collection::vec(prop::option::of(0u32..1000), 0..40),
    ) {
        let mut text = String::new();
        for (i, (owner, from, to)) in edges.iter().enumerate() {
            if let Some(Some(n)) = noise.get(i) {
                text.push_str(&format!("{}\n", n));
            } else if noise.get(i).is_some() {
                text.push('\n');
            }
            text.push_str(&format!("{} {} {}\n", owner, from, to));
        }
        let plan = read_result(text.as_bytes(), "prop.txt").unwrap();

        let mut owners: Vec<u32> = Vec::new();
        for (owner, _, _) in &edges {
            if !owners.contains(owner) {
                owners.push(*owner);
            }
        }
        prop_assert_eq!(plan.owners(), owners.clone());
        for owner in owners {
            let expected: Vec<Edge> = edges
                .iter()
                .filter(|(o, _, _)| *o == owner)
                .map(|&(_, f, t)| Edge::new(f, t))
                .collect();
            prop_assert_eq!(plan.route(owner).unwrap().edges(), expected.as_slice());
        }
    }
}
