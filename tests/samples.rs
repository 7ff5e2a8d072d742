use std::fmt::Write;
use std::io::Cursor;

use trx::*;

#[test]
fn transform_sample() {
    let result = reduce(
        transform(|x: i32| x * 2).apply(into(Vec::new())),
        vec![1, 2, 3, 4, 5],
    );

    assert_eq!(result, vec![2, 4, 6, 8, 10]);
}

#[test]
fn transform_indexed_sample() {
    let input = vec!["a", "b", "c"];
    let result = reduce(
        transform_indexed(|idx: usize, s: &str| format!("{}:{}", idx, s))
            .apply(into(Vec::new())),
        input,
    );

    assert_eq!(result, vec!["0:a", "1:b", "2:c"]);
}

#[test]
fn filter_sample() {
    let result = reduce(
        filter(|x: &i32| x % 2 == 0).apply(into(Vec::new())),
        vec![1, 2, 3, 4, 5, 6],
    );

    assert_eq!(result, vec![2, 4, 6]);
}

#[test]
fn filter_indexed_sample() {
    let result = reduce(
        filter_indexed(|idx: usize, _: &i32| idx % 2 == 0).apply(into(Vec::new())),
        vec![10, 20, 30, 40, 50],
    );

    assert_eq!(result, vec![10, 30, 50]);
}

#[test]
fn inspect_sample() {
    let mut seen = String::new();
    let result = reduce(
        inspect(|x: &i32| write!(seen, "{} ", x).unwrap()).apply(into(Vec::new())),
        vec![1, 2, 3],
    );

    assert_eq!(result, vec![1, 2, 3]);
    assert_eq!(seen, "1 2 3 ");
}

#[test]
fn inspect_indexed_sample() {
    let mut seen = String::new();
    let result = reduce(
        inspect_indexed(|idx: usize, x: &i32| write!(seen, "[{}]={} ", idx, x).unwrap())
            .apply(into(Vec::new())),
        vec![1, 2, 3],
    );

    assert_eq!(result, vec![1, 2, 3]);
    assert_eq!(seen, "[0]=1 [1]=2 [2]=3 ");
}

#[test]
fn transform_maybe_sample() {
    let input = vec!["1", "2", "abc", "4"];
    let result = reduce(
        transform_maybe(|s: &str| s.parse::<i32>()).apply(into(Vec::new())),
        input,
    );

    assert_eq!(result, vec![1, 2, 4]);
}

#[test]
fn transform_maybe_indexed_sample() {
    let input = vec!["1", "2", "abc", "4"];
    let result = reduce(
        transform_maybe_indexed(|idx: usize, s: &str| s.parse::<usize>().ok().map(|v| v * idx))
            .apply(into(Vec::new())),
        input,
    );

    assert_eq!(result, vec![0, 2, 12]);
}

#[test]
fn take_while_sample() {
    let input = vec![1, 2, 3, 4, 5, 3, 2, 1];

    assert_eq!(
        reduce(take_while(|x: &i32| *x < 4).apply(into(Vec::new())), input.clone()),
        vec![1, 2, 3]
    );
    assert_eq!(
        reduce(
            take_while_indexed(|idx: usize, _: &i32| idx < 3)
                .apply(into(Vec::new())),
            input,
        ),
        vec![1, 2, 3]
    );
}

#[test]
fn drop_while_sample() {
    let input = vec![1, 2, 3, 4, 5, 3, 2, 1];

    assert_eq!(
        reduce(drop_while(|x: &i32| *x < 4).apply(into(Vec::new())), input.clone()),
        vec![4, 5, 3, 2, 1]
    );
    assert_eq!(
        reduce(
            drop_while_indexed(|idx: usize, _: &i32| idx < 3)
                .apply(into(Vec::new())),
            input,
        ),
        vec![4, 5, 3, 2, 1]
    );
}

#[test]
fn take_drop_stride_sample() {
    let input = vec![1, 2, 3, 4, 5];

    assert_eq!(
        reduce(take(3).apply(into(Vec::new())), input.clone()),
        vec![1, 2, 3]
    );
    assert_eq!(
        reduce(drop(2).apply(into(Vec::new())), input),
        vec![3, 4, 5]
    );
    assert_eq!(
        reduce(stride(2).apply(into(Vec::new())), 0..10),
        vec![0, 2, 4, 6, 8]
    );
}

#[test]
fn flatten_sample() {
    let input = vec![vec![1, 2], vec![3, 4], vec![5, 6]];
    let result = reduce(flatten().apply(into(Vec::new())), input);

    assert_eq!(result, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn interleave_sample() {
    let result = reduce(interleave(',').apply(into(String::new())), "ABCD".chars());

    assert_eq!(result, "A,B,C,D");
}

#[test]
fn predicates_sample() {
    assert!(reduce(all_of(|x: &i32| x % 2 == 0), vec![2, 4, 6, 8]));
    assert!(reduce(any_of(|x: &i32| x % 2 == 0), vec![1, 2, 3, 4, 5]));
    assert!(reduce(none_of(|x: &i32| x % 2 == 0), vec![1, 3, 5, 7]));
}

#[test]
fn predicate_reducer_types_are_public() {
    fn is_odd(x: &i32) -> bool {
        x % 2 == 1
    }

    let no_odd: Reducer<bool, NoneOf<fn(&i32) -> bool>> = none_of(is_odd as fn(&i32) -> bool);
    let all_odd: Reducer<bool, AllOf<fn(&i32) -> bool>> = all_of(is_odd as fn(&i32) -> bool);

    assert!(reduce(no_odd, vec![2, 4, 6]));
    assert!(!reduce(all_odd, vec![1, 2, 3]));
}

#[test]
fn discard_sample() {
    let mut seen = String::new();
    reduce(
        inspect(|x: &i32| write!(seen, "{} ", x).unwrap()).apply(discard()),
        vec![1, 2, 3, 4, 5],
    );

    assert_eq!(seen, "1 2 3 4 5 ");
}

#[test]
fn partition_sample() {
    let (even, odd) = reduce(
        partition(|x: &i32| x % 2 == 0, into(Vec::new()), into(Vec::new())),
        1..=10,
    );

    assert_eq!(even, vec![2, 4, 6, 8, 10]);
    assert_eq!(odd, vec![1, 3, 5, 7, 9]);
}

#[test]
fn fork_sample() {
    let (all, n) = reduce(fork((into(Vec::new()), count())), vec![1, 2, 3, 4, 5]);

    assert_eq!(all, vec![1, 2, 3, 4, 5]);
    assert_eq!(n, 5);
}

#[test]
fn copy_to_sample() {
    let mut dest = [0; 5];
    let slots = reduce(copy_to(&mut dest), vec![1, 2, 3, 4, 5, 6, 7]);

    assert_eq!(slots.written(), 5);
    assert_eq!(dest, [1, 2, 3, 4, 5]);
}

#[test]
fn push_back_sample() {
    let mut result = vec![0];
    reduce(push_back(&mut result), vec![1, 2, 3]);

    assert_eq!(result, vec![0, 1, 2, 3]);
}

#[test]
fn into_and_count_sample() {
    assert_eq!(reduce(into(Vec::new()), vec![1, 2, 3, 4, 5]), vec![1, 2, 3, 4, 5]);
    assert_eq!(reduce(count(), vec![1, 2, 3, 4, 5]), 5);
}

#[test]
fn zipped_sample() {
    let numbers = vec![1, 2, 3, 4];
    let names = vec!["one", "two", "three", "four"];

    let result = reduce2(
        filter(|(a, _): &(&i32, &&str)| **a % 2 == 0)
            .then(unpack(|a: &i32, b: &&str| format!("{}:{}", b, a)))
            .apply(into(Vec::new())),
        &numbers,
        &names,
    );

    assert_eq!(result, vec!["two:2", "four:4"]);
}

#[test]
fn chain_sample() {
    let result = chain(from(vec![1, 2, 3]), from(vec![10, 20, 30]))
        .reduce(into(Vec::new()));

    assert_eq!(result, vec![1, 2, 3, 10, 20, 30]);
}

#[test]
fn custom_generator_sample() {
    let squares = generator(|sink: &mut dyn Sink<(i32, i32)>| {
        for i in 0..10 {
            if sink.accept((i, i * i)).is_stop() {
                break;
            }
        }
    });

    let result = squares.reduce(
        unpack(|v: i32, square: i32| format!("{} {}", v, square))
            .then(take(4))
            .apply(into(Vec::new())),
    );

    assert_eq!(result, vec!["0 0", "1 1", "2 4", "3 9"]);
}

#[test]
fn out_sample() {
    let mut target = out(transform(|x: i32| x.to_string()).apply(into(Vec::new())));
    target.extend(vec![1, 2, 3]);

    assert_eq!(target.into_state(), vec!["1", "2", "3"]);
}

#[test]
fn out_ignores_writes_after_stop() {
    let mut target = out(take(2).apply(into(Vec::new())));
    target.extend(1..=5);

    assert!(target.is_done());
    assert_eq!(target.into_state(), vec![1, 2]);
}

#[test]
fn folds_sample() {
    assert_eq!(reduce(to_reducer(0, |s: i32, x: i32| s + x), vec![5, 10, 15]), 30);
    assert_eq!(
        reduce(accumulate(0, |s: i32, x: i32| s + x * x), vec![1, 2, 3, 4, 5]),
        55
    );
}

#[test]
fn for_each_sample() {
    let mut result = Vec::new();
    let calls = reduce(for_each(|x: i32| result.push(x * 2)), vec![1, 2, 3, 4, 5]);

    assert_eq!(calls, 5);
    assert_eq!(result, vec![2, 4, 6, 8, 10]);

    let mut result = Vec::new();
    reduce(
        for_each_indexed(|idx: usize, x: usize| result.push(x * 2 + 100 * idx)),
        vec![1, 2, 3, 4, 5],
    );

    assert_eq!(result, vec![2, 104, 206, 308, 410]);
}

#[test]
fn unpack_sample() {
    let input = vec![(1, 2, 'a'), (2, 3, 'b')];
    let result = reduce(
        unpack(|a: i32, b: i32, c: char| format!("{}{}", 10 * a + b, c))
            .apply(into(Vec::new())),
        input,
    );

    assert_eq!(result, vec!["12a", "23b"]);
}

#[test]
fn project_sample() {
    struct Item {
        a: i32,
        b: String,
        c: char,
    }

    let input = vec![
        Item {
            a: 10,
            b: "A".into(),
            c: 'z',
        },
        Item {
            a: 20,
            b: "BB".into(),
            c: 'y',
        },
        Item {
            a: 35,
            b: "CCC".into(),
            c: 'x',
        },
    ];

    let result = reduce(
        project((
            |s: &Item| s.c,
            |s: &Item| s.b.chars().next(),
            |s: &Item| s.a,
        ))
        .then(unpack(|c: char, b: Option<char>, a: i32| (c, b, a)))
        .apply(into(Vec::new())),
        input,
    );

    assert_eq!(
        result,
        vec![('z', Some('A'), 10), ('y', Some('B'), 20), ('x', Some('C'), 35)]
    );
}

#[test]
fn read_lines_sample() {
    let input = "First line\nSecond line\r\nThird line\nFourth line";
    let result = read_lines(Cursor::new(input)).reduce(
        transform_indexed(|idx: usize, line: String| format!("{}: {}", idx + 1, line))
            .apply(into(Vec::new())),
    );

    assert_eq!(
        result,
        vec!["1: First line", "2: Second line", "3: Third line", "4: Fourth line"]
    );
}

#[test]
fn ranges_sample() {
    assert_eq!(range(2, 6).reduce(into(Vec::new())), vec![2, 3, 4, 5]);
    assert_eq!(range_to(3usize).reduce(count()), 3);
    assert_eq!(
        iota(1u64).reduce(
            transform(|x: u64| x * x)
                .then(take_while(|x: &u64| *x < 30))
                .apply(sum(0u64))
        ),
        1 + 4 + 9 + 16 + 25
    );
}

#[test]
fn zipped_three_sample() {
    let result = reduce3(
        unpack(|a: i32, b: char, c: bool| format!("{}{}{}", a, b, c))
            .apply(into(Vec::new())),
        vec![1, 2, 3],
        "xy".chars(),
        vec![true, false, true],
    );

    assert_eq!(result, vec!["1xtrue", "2yfalse"]);
}
