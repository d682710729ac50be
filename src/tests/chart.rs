// This is actually defined at `crate::chart::tests_for_chart`

use crate::chart::*;
use crate::state::{State, States, StateKey};
use crate::tests::{ambiguous, brackets, scanned};
use crate::{Grammar, Rule, Val};

use expect_test::expect;

#[test]
fn equal_keys_are_stored_once() {
    let g = brackets();
    let p = g.rules_by_name("P")[0];
    let s = g.rules_by_name("Ps")[1];
    let mut states = States::new();
    let mut table = Table::new();

    assert!(table.add_state(&mut states, State::new(&g, p, 0)).is_some());
    assert!(table.add_state(&mut states, State::new(&g, p, 0)).is_none());
    assert!(table.add_state(&mut states, State::new(&g, p, 1)).is_some());
    assert!(table.add_state(&mut states, State::new(&g, s, 0)).is_some());
    assert!(table.add_state(&mut states, State::new(&g, p, 1)).is_none());

    assert_eq!(table.len(), 3);
    assert_eq!(states.len(), 3);
    assert!(table.contains(&StateKey { rule: p, dot: 0, start: 1 }));
    let keys: Vec<StateKey> = table.state_ids().iter().map(|&id| states.get(id).key()).collect();
    for (i, k) in keys.iter().enumerate() {
        assert!(!keys[i + 1..].contains(k), "duplicate key {:?}", k);
    }
}

#[test]
fn first_inserted_state_keeps_its_result() {
    let g = Grammar::new(vec![
        Rule::new("s", vec![crate::tests::lit("x")]),
    ]).unwrap();
    let s = g.root_rules()[0];
    let mut chart = ParseChart::new(&g);
    let seed = chart.table(0).state_ids()[0];

    let first = chart.advance_state(seed, 1, Val::from("first"));
    let second = chart.advance_state(seed, 1, Val::from("second"));
    assert!(first.is_some());
    assert!(second.is_none());
    assert_eq!(chart.table(1).len(), 1);
    let kept = chart.state(first.unwrap());
    assert_eq!(kept.rule(), s);
    assert_eq!(kept.result(), &Val::List(vec![Val::from("first")]));
}

#[test]
fn iteration_visits_states_appended_mid_scan() {
    let g = ambiguous();
    let mut chart = ParseChart::new(&g);
    let mut visited = 0;
    chart.iterate_states(0, |chart, _id| {
        visited += 1;
        if visited == 1 {
            // every rule of the grammar, at a start that cannot collide with the seeds
            for (rule, _) in chart.grammar().rules() {
                chart.add_state(0, State::new(chart.grammar(), rule, 7));
            }
        }
    });
    assert_eq!(visited, 2 + 4);
}

#[test]
fn tables_grow_one_token_at_a_time() {
    let g = brackets();
    let mut chart = ParseChart::new(&g);
    let tokens = [scanned('('), scanned(')')];

    chart.process(0, Some(&tokens[0]));
    let table_0 = chart.table(0).len();
    // everything in table 1 so far was scanned out of table 0
    for &id in chart.tables()[1].state_ids() {
        let s = chart.state(id);
        assert_eq!(s.dot(), 1);
        assert!(chart.tables()[0].state_ids().contains(&s.ancestor().unwrap()));
    }

    chart.process(1, Some(&tokens[1]));
    assert_eq!(chart.table(0).len(), table_0);
    for &id in chart.tables()[2].state_ids() {
        let ancestor = chart.state(id).ancestor().unwrap();
        assert!(chart.tables()[1].state_ids().contains(&ancestor));
    }

    chart.process(2, None);
    assert_eq!(chart.tables().len(), 3);
    assert_eq!(chart.success_states().len(), 1);
}

#[test]
fn chart_renders_tables_of_dotted_rules() {
    let g = ambiguous();
    let mut chart = ParseChart::new(&g);
    chart.process(0, Some(&scanned('x')));
    chart.process(1, None);
    expect![[r#"
        Table 0:
        a → • b (0)
        a → • c (0)
        b → • x (0)
        c → • x (0)

        Table 1:
        b → x • (0)
        c → x • (0)
        a → b • (0)
        a → c • (0)

    "#]].assert_eq(&chart.to_string());
}

#[test]
fn predictions_come_from_the_final_table() {
    let g = brackets();
    let mut chart = ParseChart::new(&g);
    chart.process(0, None);
    assert!(chart.success_states().is_empty());
    assert_eq!(chart.predictions(), vec!["(", "[", "{", "<"]);
}
