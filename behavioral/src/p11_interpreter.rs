// Pattern 11: Interpreter
// A tiny boolean grammar: variables are terminal expressions, AND / OR
// are nonterminals that own their operands. The context maps variable
// names to values, with unset names reading as false. `clone_box` makes
// whole expression trees copyable behind trait objects.

use std::collections::HashMap;

#[derive(Default)]
struct Context {
    variables: HashMap<String, bool>,
}

impl Context {
    fn set(&mut self, name: &str, value: bool) {
        self.variables.insert(name.to_string(), value);
    }

    fn get(&self, name: &str) -> bool {
        self.variables.get(name).copied().unwrap_or(false)
    }
}

trait Expression {
    fn interpret(&self, context: &Context) -> bool;
    fn clone_box(&self) -> Box<dyn Expression>;
}

impl Clone for Box<dyn Expression> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

// Terminal expression: a variable lookup.
#[derive(Clone)]
struct Variable {
    name: String,
}

impl Variable {
    fn new(name: &str) -> Box<dyn Expression> {
        Box::new(Variable {
            name: name.to_string(),
        })
    }
}

impl Expression for Variable {
    fn interpret(&self, context: &Context) -> bool {
        context.get(&self.name)
    }

    fn clone_box(&self) -> Box<dyn Expression> {
        Box::new(self.clone())
    }
}

#[derive(Clone)]
struct OrExpression {
    left: Box<dyn Expression>,
    right: Box<dyn Expression>,
}

impl OrExpression {
    fn new(left: Box<dyn Expression>, right: Box<dyn Expression>) -> Box<dyn Expression> {
        Box::new(OrExpression { left, right })
    }
}

impl Expression for OrExpression {
    fn interpret(&self, context: &Context) -> bool {
        self.left.interpret(context) || self.right.interpret(context)
    }

    fn clone_box(&self) -> Box<dyn Expression> {
        Box::new(self.clone())
    }
}

#[derive(Clone)]
struct AndExpression {
    left: Box<dyn Expression>,
    right: Box<dyn Expression>,
}

impl AndExpression {
    fn new(left: Box<dyn Expression>, right: Box<dyn Expression>) -> Box<dyn Expression> {
        Box::new(AndExpression { left, right })
    }
}

impl Expression for AndExpression {
    fn interpret(&self, context: &Context) -> bool {
        self.left.interpret(context) && self.right.interpret(context)
    }

    fn clone_box(&self) -> Box<dyn Expression> {
        Box::new(self.clone())
    }
}

fn main() {
    println!("=== Interpreter Pattern Demo ===\n");

    let mut context = Context::default();
    context.set("A", true);
    context.set("B", false);

    let a = Variable::new("A");
    let b = Variable::new("B");
    let a_or_b = OrExpression::new(a.clone(), b.clone());
    let a_and_b = AndExpression::new(a, b);

    println!("A OR B  is {}", a_or_b.interpret(&context));
    println!("A AND B is {}", a_and_b.interpret(&context));

    // Unset variables read as false.
    println!("C       is {}", Variable::new("C").interpret(&context));

    // Nonterminals nest; the clone is a full deep copy of the tree.
    let nested = AndExpression::new(a_or_b.clone(), Variable::new("A"));
    println!("(A OR B) AND A is {}", nested.interpret(&context));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_ab(a: bool, b: bool) -> Context {
        let mut context = Context::default();
        context.set("A", a);
        context.set("B", b);
        context
    }

    #[test]
    fn test_variable_reads_its_context_value() {
        let context = context_ab(true, false);
        assert!(Variable::new("A").interpret(&context));
        assert!(!Variable::new("B").interpret(&context));
    }

    #[test]
    fn test_unset_variable_defaults_to_false() {
        let context = Context::default();
        assert!(!Variable::new("missing").interpret(&context));
    }

    #[test]
    fn test_or_is_true_when_either_side_is() {
        let expr = OrExpression::new(Variable::new("A"), Variable::new("B"));
        assert!(expr.interpret(&context_ab(true, false)));
        assert!(expr.interpret(&context_ab(false, true)));
        assert!(!expr.interpret(&context_ab(false, false)));
    }

    #[test]
    fn test_and_needs_both_sides() {
        let expr = AndExpression::new(Variable::new("A"), Variable::new("B"));
        assert!(expr.interpret(&context_ab(true, true)));
        assert!(!expr.interpret(&context_ab(true, false)));
    }

    #[test]
    fn test_cloned_tree_evaluates_like_the_original() {
        let context = context_ab(true, false);
        let original = AndExpression::new(
            OrExpression::new(Variable::new("A"), Variable::new("B")),
            Variable::new("A"),
        );
        let copy = original.clone();

        assert_eq!(original.interpret(&context), copy.interpret(&context));
        assert!(copy.interpret(&context));
    }
}
