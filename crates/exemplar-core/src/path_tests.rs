use crate::path::{PathExpression, Predicate, Relation, Step};

#[test]
fn bare_step() {
    assert_eq!(Step::new("Build").to_string(), "Build()");
}

#[test]
fn equals_predicates_keep_order() {
    let step = Step::new("Build")
        .with_predicate(Predicate::equals("provider", "mybuild"))
        .with_predicate(Predicate::equals("status", "failed"));

    insta::assert_snapshot!(step.to_string(), @"Build()[@provider='mybuild'][@status='failed']");
}

#[test]
fn exists_predicate_is_bracketed() {
    let step = Step::new("Build").with_predicate(Predicate::exists("repo", Step::new("Repo")));

    assert_eq!(step.to_string(), "Build()[/repo::Repo()]");
}

#[test]
fn match_relations_follow_predicates() {
    let repo = Step::new("Repo").with_predicate(Predicate::equals("name", "rug"));
    let step = Step::new("Build")
        .with_match(Relation::new("repo", repo))
        .with_predicate(Predicate::equals("provider", "travis"));

    insta::assert_snapshot!(step.to_string(), @"Build()[@provider='travis']/repo::Repo()[@name='rug']");
}

#[test]
fn negation() {
    let p = Predicate::negate(Predicate::equals("status", "failed"));

    assert_eq!(p.to_string(), "[not @status='failed']");
}

#[test]
fn disjunction() {
    let p = Predicate::or(
        Predicate::equals("provider", "mybuild"),
        Predicate::equals("status", "failed"),
    );

    assert_eq!(p.to_string(), "[@provider='mybuild' or @status='failed']");
}

#[test]
fn optional_relation() {
    let p = Predicate::optional(Predicate::exists("repo", Step::new("Repo")));

    assert_eq!(p.to_string(), "[/repo::Repo()]?");
}

#[test]
fn conjunction_is_parenthesized_under_negation() {
    let both = Predicate::all(vec![
        Predicate::equals("a", "x"),
        Predicate::equals("b", "y"),
    ])
    .unwrap();

    insta::assert_snapshot!(Predicate::negate(both.clone()).to_string(), @"[not (@a='x' and @b='y')]");
    insta::assert_snapshot!(
        Predicate::or(both, Predicate::equals("c", "z")).to_string(),
        @"[(@a='x' and @b='y') or @c='z']"
    );
}

#[test]
fn disjunction_is_parenthesized_inside_conjunction_and_negation() {
    let either = Predicate::or(Predicate::equals("a", "x"), Predicate::equals("b", "y"));
    let both = Predicate::And(vec![either.clone(), Predicate::equals("c", "z")]);

    assert_eq!(
        Predicate::negate(both).to_string(),
        "[not ((@a='x' or @b='y') and @c='z')]"
    );
    assert_eq!(
        Predicate::negate(either).to_string(),
        "[not (@a='x' or @b='y')]"
    );
}

#[test]
fn conjunction_on_a_step_is_one_predicate_per_operand() {
    let either = Predicate::or(Predicate::equals("a", "x"), Predicate::equals("b", "y"));
    let both = Predicate::And(vec![either, Predicate::equals("c", "z")]);

    assert_eq!(both.to_string(), "[@a='x' or @b='y'][@c='z']");
}

#[test]
fn optional_conjunction_marks_the_group() {
    let both = Predicate::all(vec![
        Predicate::equals("a", "x"),
        Predicate::equals("b", "y"),
    ])
    .unwrap();

    insta::assert_snapshot!(Predicate::optional(both).to_string(), @"[@a='x'][@b='y']?");
}

#[test]
fn optional_custom_predicate_keeps_its_brackets() {
    let p = Predicate::optional(Predicate::optional(Predicate::custom("[@a='1'][@b='2']")));

    assert_eq!(p.to_string(), "[@a='1'][@b='2']?");
}

#[test]
fn nested_disjunction_needs_no_parens() {
    let p = Predicate::or(
        Predicate::or(Predicate::equals("a", "1"), Predicate::equals("b", "2")),
        Predicate::equals("c", "3"),
    );

    assert_eq!(p.to_string(), "[@a='1' or @b='2' or @c='3']");
}

#[test]
fn all_of_one_is_itself() {
    let p = Predicate::equals("a", "x");

    assert_eq!(Predicate::all(vec![p.clone()]), Some(p));
    assert_eq!(Predicate::all(Vec::new()), None);
}

#[test]
fn custom_predicate_is_verbatim_at_top_level() {
    let step = Step::new("Build").with_predicate(Predicate::custom("[@name='amy']"));

    assert_eq!(step.to_string(), "Build()[@name='amy']");
}

#[test]
fn custom_predicate_loses_brackets_when_nested() {
    let p = Predicate::negate(Predicate::custom("[@name='amy']"));

    assert_eq!(p.to_string(), "[not @name='amy']");
}

#[test]
fn several_custom_predicates_nest_as_conjunction() {
    let custom = Predicate::custom("[@a='1'][@b='2']");

    insta::assert_snapshot!(Predicate::negate(custom.clone()).to_string(), @"[not (@a='1' and @b='2')]");
    insta::assert_snapshot!(
        Predicate::or(custom, Predicate::equals("c", "3")).to_string(),
        @"[(@a='1' and @b='2') or @c='3']"
    );
}

#[test]
fn compound_custom_text_is_parenthesized_when_nested() {
    let custom = Predicate::custom("[@a='1' or @b='2'][not @c='3']");

    insta::assert_snapshot!(Predicate::negate(custom).to_string(), @"[not ((@a='1' or @b='2') and (not @c='3'))]");
    assert_eq!(
        Predicate::negate(Predicate::custom("[@a='1' or @b='2']")).to_string(),
        "[not (@a='1' or @b='2')]"
    );
}

#[test]
fn brackets_inside_quoted_custom_values_are_data() {
    let p = Predicate::negate(Predicate::custom("[@title='a][b c']"));

    assert_eq!(p.to_string(), "[not @title='a][b c']");
}

#[test]
fn unbracketed_custom_text_is_one_body() {
    let p = Predicate::negate(Predicate::custom("@name='amy'"));

    assert_eq!(p.to_string(), "[not @name='amy']");
}

#[test]
fn nested_optional_renders_operand() {
    let p = Predicate::negate(Predicate::optional(Predicate::equals("a", "x")));

    assert_eq!(p.to_string(), "[not @a='x']");
}

#[test]
fn quotes_and_backslashes_are_escaped() {
    let p = Predicate::equals("message", r"it's a \ path");

    assert_eq!(p.to_string(), r"[@message='it\'s a \\ path']");
}

#[test]
fn non_string_scalars_are_quoted() {
    let step = Step::new("Build")
        .with_predicate(Predicate::equals("number", 7))
        .with_predicate(Predicate::equals("passed", false));

    assert_eq!(step.to_string(), "Build()[@number='7'][@passed='false']");
}

#[test]
fn into_constraints_turns_matches_into_existence() {
    let step = Step::new("Build")
        .with_predicate(Predicate::equals("status", "failed"))
        .with_match(Relation::new("repo", Step::new("Repo")));

    assert_eq!(
        step.into_constraints(),
        vec![
            Predicate::equals("status", "failed"),
            Predicate::exists("repo", Step::new("Repo")),
        ]
    );
}

#[test]
fn path_expression_is_root_anchored() {
    let step = Step::new("Commit")
        .with_predicate(Predicate::exists("deltas", Step::new("Delta")))
        .with_predicate(Predicate::exists(
            "repo",
            Step::new("Repo").with_predicate(Predicate::exists("org", Step::new("Org"))),
        ));
    let expr = PathExpression::absolute(&step);

    insta::assert_snapshot!(expr.expression(), @"/Commit()[/deltas::Delta()][/repo::Repo()[/org::Org()]]");
    assert_eq!(expr.to_string(), expr.clone().into_string());
}
