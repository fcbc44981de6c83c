use aoc25_day_3::{part1, part2};
use divan::black_box;

const INPUT: &str = "987654321111111
811111111111119
234234234234278
818181911112111";

fn main() {
    divan::main();
}

#[divan::bench]
fn bench_part1() {
    part1::process(black_box(INPUT)).unwrap();
}

#[divan::bench]
fn bench_part2() {
    part2::process(black_box(INPUT)).unwrap();
}
