// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Iterator over all `k`-element combinations of the indices `0..n`.
///
/// Combinations are yielded as strictly increasing index vectors in lexicographic order,
/// e.g. `n = 4, k = 2` gives `[0,1], [0,2], [0,3], [1,2], [1,3], [2,3]`. The order is
/// part of the contract: the binning search breaks entropy ties by taking the first
/// candidate in this order.
///
/// `k = 0` yields a single empty combination; `k > n` yields nothing.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    k: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        let done = k > n;
        Self {
            n,
            k,
            indices: if done { Vec::new() } else { (0..k).collect() },
            started: false,
            done,
        }
    }

    /// Total number of combinations, if it fits in a `u128`.
    pub fn total(&self) -> Option<u128> {
        binomial(self.n as u64, self.k as u64)
    }

    // Advance `indices` to the next combination; false once the last one was produced.
    fn advance(&mut self) -> bool {
        let k = self.k;
        let offset = self.n - k;
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] != i + offset) else {
            return false;
        };
        self.indices[i] += 1;
        for j in (i + 1)..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
        } else if !self.advance() {
            self.done = true;
            return None;
        }
        Some(self.indices.clone())
    }
}

/// Binomial coefficient `C(n, k)`, or `None` if an intermediate product overflows `u128`.
pub fn binomial(n: u64, k: u64) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc == C(n, i) here, and C(n, i) * (n - i) is divisible by (i + 1)
        acc = acc.checked_mul(u128::from(n - i))? / u128::from(i + 1);
    }
    Some(acc)
}
