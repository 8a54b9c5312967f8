use entailment::{
    calculus::{knowledge::Contradiction, Evaluable, Proposition, Symbol},
    parser::parse,
    Config, Method, Solver, SolverError,
};
use std::collections::BTreeMap;

const HORN_KB: &str = "p2=>p3; p3=>p1; c=>e; b&e=>f; f&g=>h; p1=>d; p1&p3=>c; a; b; p2;";

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn told(method: Method, knowledge: &str) -> Box<dyn Solver<Error = SolverError>> {
    let mut solver = method.solver(Config::default());
    solver.tell(knowledge).unwrap();
    solver
}

mod scenarios {
    use super::*;

    #[test]
    fn horn_knowledge_base() {
        init_logging();

        let expected = [
            ("a", true),
            ("b", true),
            ("c", true),
            ("d", true),
            ("e", true),
            ("f", true),
            ("g", false),
            ("h", false),
            ("p1", true),
            ("p2", true),
            ("p3", true),
        ];

        for method in Method::ALL {
            let mut solver = told(method, HORN_KB);
            for (symbol, entailed) in expected {
                assert_eq!(
                    entailed,
                    solver.solve_and_query(symbol).unwrap(),
                    "{} asked {}",
                    method,
                    symbol
                );
            }
        }
    }

    #[test]
    fn single_fact() {
        init_logging();

        for method in Method::ALL {
            let mut solver = told(method, "a;");

            assert!(solver.solve_and_query("a").unwrap(), "{}", method);
            assert_eq!(1, solver.query("a"), "{}", method);

            assert!(!solver.solve_and_query("b").unwrap(), "{}", method);
            assert_eq!(0, solver.query("b"), "{}", method);
            assert_eq!(0, solver.query_using_rule("b").unwrap(), "{}", method);
        }
    }

    #[test]
    fn contradiction_in_chaining() {
        init_logging();

        let contradiction = SolverError::Contradiction(Contradiction {
            symbol: Symbol::new("a"),
            known: true,
            derived: false,
        });

        for method in [Method::ForwardChaining, Method::BackwardChaining] {
            let mut solver = told(method, "a; ~a;");
            assert_eq!(
                Err(contradiction.clone()),
                solver.solve_and_query("a"),
                "{}",
                method
            );
            // The knowledge base stays usable and keeps both sentences.
            assert_eq!(2, solver.knowledge_base().len());
            assert_eq!(Err(contradiction.clone()), solver.solve_and_query("a"));
        }

        // Model checking finds no model instead.
        let mut solver = told(Method::TruthTable, "a; ~a;");
        assert!(!solver.solve_and_query("a").unwrap());
        assert!(!solver.solve_and_query("b").unwrap());
    }

    #[test]
    fn parenthesised_antecedent() {
        let p = parse("(a&b)=>c").unwrap();
        assert_eq!(
            Proposition::implies(
                Proposition::and(Proposition::symbol("a"), Proposition::symbol("b")),
                Proposition::symbol("c")
            ),
            p
        );

        let world: BTreeMap<Symbol, bool> = [("a", true), ("b", true), ("c", false)]
            .into_iter()
            .map(|(name, value)| (Symbol::new(name), value))
            .collect();
        assert!(!p.check(&world));
    }
}

mod knowledge_base {
    use super::*;

    #[test]
    fn tell_accumulates() {
        for method in Method::ALL {
            let mut solver = told(method, "a => b");
            assert!(!solver.solve_and_query("b").unwrap(), "{}", method);

            solver.tell("a").unwrap();
            assert!(solver.solve_and_query("b").unwrap(), "{}", method);
            assert_eq!("(a => b); a", solver.knowledge_base().to_string());
        }
    }

    #[test]
    fn rejected_tell_changes_nothing() {
        for method in Method::ALL {
            let mut solver = told(method, "a");
            assert!(matches!(
                solver.tell("b; (c & d"),
                Err(SolverError::InvalidSentence(_))
            ));
            assert_eq!(1, solver.knowledge_base().len(), "{}", method);
            assert!(!solver.solve_and_query("b").unwrap(), "{}", method);
        }
    }

    #[test]
    fn chaining_rejects_compound_consequents() {
        for method in [Method::ForwardChaining, Method::BackwardChaining] {
            let mut solver = method.solver(Config::default());
            assert!(matches!(
                solver.tell("a; a => b & c"),
                Err(SolverError::MalformedHornClause(_))
            ));
            assert!(solver.knowledge_base().is_empty());
        }

        let mut solver = told(Method::TruthTable, "a; a => b & c");
        assert!(solver.solve_and_query("c").unwrap());
    }

    #[test]
    fn reset_forgets_everything() {
        for method in Method::ALL {
            let mut solver = told(method, HORN_KB);
            assert!(solver.solve_and_query("f").unwrap());

            solver.reset();
            assert!(solver.knowledge_base().is_empty(), "{}", method);
            assert!(!solver.solve_and_query("f").unwrap(), "{}", method);
            assert!(solver.proven_symbols().is_empty(), "{}", method);
        }
    }
}

mod formulas {
    use super::*;

    #[test]
    fn all_methods_agree_on_formula_queries() {
        let queries = [
            ("c & d", true),
            ("e || g", true),
            ("~g => h", false),
            ("f & h", false),
            ("g => a", true),
        ];

        for method in Method::ALL {
            let mut solver = told(method, HORN_KB);
            for (formula, entailed) in queries {
                let support = solver.query_using_rule(formula).unwrap();
                assert_eq!(entailed, support > 0, "{} asked {}", method, formula);
            }
        }
    }

    #[test]
    fn proven_symbols_of_forward_chaining_and_truth_table_agree() {
        let mut fc = told(Method::ForwardChaining, HORN_KB);
        let tt = told(Method::TruthTable, HORN_KB);

        // Asking about `h` makes forward chaining derive everything it can.
        assert!(!fc.solve_and_query("h").unwrap());

        let mut derived = fc.proven_symbols();
        let mut modelled = tt.proven_symbols();
        derived.sort();
        modelled.sort();
        assert_eq!(modelled, derived);
    }
}
