// Dotlanth
// Copyright (C) 2025 Synerthink

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use dotscript_analyzer::{AnalyzerConfig, ScriptAnalyzer, analyze};

fn strategy_script(blocks: usize) -> String {
    let mut source = String::from("var total = 0\n");
    for i in 0..blocks {
        source.push_str(&format!(
            "var fast{i} = SMA(Close, {})\nvar slow{i} = EMA(Close, {})\nif fast{i} > slow{i} and RSI(Close, 14) < 70\n    total = total + fast{i} * 2\n    Buy()\nelse\n    Sell()\nendif\nfor k{i} = 1 to 10\n    total = total + k{i}\nendfor\n",
            10 + i,
            30 + i
        ));
    }
    source.push_str("Print(total)\n");
    source
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    for blocks in [10, 100, 1000] {
        let source = strategy_script(blocks);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_function(format!("strategy_{blocks}_blocks"), |b| b.iter(|| analyze(black_box(&source))));
    }

    group.finish();
}

fn bench_configured_analyzer(c: &mut Criterion) {
    let analyzer = ScriptAnalyzer::new(AnalyzerConfig::new().with_builtins(["VWAP", "Notify"])).unwrap();
    let source = strategy_script(100);

    c.bench_function("analyze_with_extra_builtins", |b| b.iter(|| analyzer.analyze(black_box(&source))));
}

criterion_group!(benches, bench_analyze, bench_configured_analyzer);
criterion_main!(benches);
