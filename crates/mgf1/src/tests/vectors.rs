// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! MGF1 known-answer vectors.
//!
//! Seed, hashed seed and expected mask stem from the strongSwan libstrongswan
//! MGF1 test suite (SHA-1 and SHA-256 cases).

use crate::HashAlgorithm;

/// A single MGF1 known-answer test case.
pub(crate) struct MaskVector {
    pub algorithm: HashAlgorithm,
    pub hash_size: usize,
    /// Raw seed material (hex).
    pub seed: &'static str,
    /// Digest of `seed` under `algorithm` (hex).
    pub hashed_seed: &'static str,
    /// Expected stream prefix (hex).
    pub mask: &'static str,
    /// Batch lengths exercising resumable reads; the sum stays within `mask`.
    pub batches: [usize; 3],
}

pub(crate) const MASK_VECTORS: [MaskVector; 2] = [
    MaskVector {
        algorithm: HashAlgorithm::Sha1,
        hash_size: 20,
        seed: "eda5c3bcafb3207d14a154f78b37f28d8c9bd563573811c2b5cabf06434519d5\
               e736d02921da022045f65f0f10042ae36a1dd59f1d66448ffac6caa46e3b0066\
               a6c9805cf52dd772c6d44f3072a2ade033e855d5e6d6001da868ff97368af4d6\
               f1b67e1f06cb57cb3538f22df620",
        hashed_seed: "f39b0bb49750b5a7e6bddad09a52bea021c490b6",
        mask: "104376726cdea00e7751fb58398a36e1632bc917560c4b46a407a43b8e334dd1\
               65f1acc859213216442b7fb2a8a7265de802be8edc34eb1076168cdd90923d29\
               90984611735347b12cd483789b932f5bfc26ff42081f7066404be7223a56106d\
               4d290bcea621b55c71662f7035d88a9233f016d40e438a14",
        batches: [60, 20, 15],
    },
    MaskVector {
        algorithm: HashAlgorithm::Sha256,
        hash_size: 32,
        seed: "52c5dd1eef761b5308e4863f91129869c59ddef6fcfa93ce325266f9c997f642\
               002c64ed1a6b140a4b04cf6d2d820a07a23bdece198a39431661299868eae5cc\
               0af8e97126f107362c071eebe428a2f4a812c0c82037f8f26cafdc6f2ed06258\
               d237036dfa6e1aac9fca56c6a45241e80f1b0cb9e6badee1035ec2e5f8f4f346\
               3a12c01f3a00d09118dd53e422f526a454ee20f080",
        hashed_seed: "76898b1b60ec109d8f13f2fed985c1ab7eeeb131ddf77f0c7df96b7b1980bd28",
        mask: "f119024fda58059a07df6181220e1546cb353cdcad20d93f0dd1aa64665cfa4a\
               fed68f555715b2a6a0e6a8c6bd28b4d56e5b4bb09709f5ac57651397712c4513\
               3deefbbffeafbb4b0d5c45d42f1792076611f546f80c0392f5f5ffa4f352f408\
               2c49321a935198b6948339cf6b1f2ffc2bff10717d356ceac566c7267d9eacdd\
               35d7063f4082dac32b3c913a32f8b2c6444dcdb6545f819559a1e54ea50a4a42",
        batches: [64, 32, 33],
    },
];
