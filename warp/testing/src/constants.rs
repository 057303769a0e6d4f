use warp_types::{BlockInfo, ChainCode, Hash256};

/// Chain ID of the EVM side, as used in typed data domains.
pub const MOCK_CHAIN_ID: u64 = 8453;

pub const MOCK_GENESIS_BLOCK: BlockInfo = BlockInfo {
    height: 1,
    timestamp: 1_700_000_000,
};

pub const XCH: ChainCode = ChainCode::from_inner(*b"xch");

/// Supported, but not the chain any adapter expects messages from.
pub const TST: ChainCode = ChainCode::from_inner(*b"tst");

pub const ONE_ETHER: u128 = 1_000_000_000_000_000_000;

/// The message toll: 0.001 ether.
pub const MESSAGE_TOLL: u128 = ONE_ETHER / 1_000;

/// 0.3%
pub const TIP_BPS: u16 = 30;

/// Token units per mojo, for tokens with 18 decimals.
pub const MOJO_TO_TOKEN_RATIO: u128 = 1_000_000_000_000_000;

pub const BURN_PUZZLE_HASH: Hash256 =
    Hash256::from_inner(*b"burn-puzzle-hash\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0");

pub const MINT_PUZZLE_HASH: Hash256 =
    Hash256::from_inner(*b"mint-puzzle-hash\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0");

pub const LOCKER_PUZZLE_HASH: Hash256 =
    Hash256::from_inner(*b"locker-puzzle-hash\0\0\0\0\0\0\0\0\0\0\0\0\0\0");

pub const UNLOCKER_PUZZLE_HASH: Hash256 =
    Hash256::from_inner(*b"unlocker-puzzle-hash\0\0\0\0\0\0\0\0\0\0\0\0");
