use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// ── Storage Keys ─────────────────────────────────────────────────────────────

const ADMIN_TIER_PREFIX: Symbol = symbol_short!("ADM_TIER");
const SUPER_ADMIN: Symbol = symbol_short!("S_ADMIN");

/// Remaining-ledger threshold below which persistent entries are bumped.
pub const TTL_THRESHOLD: u32 = 5_184_000;
/// Ledger count persistent entries are extended to when bumped.
pub const TTL_EXTEND_TO: u32 = 10_368_000;

// ── Admin Tier Enum ──────────────────────────────────────────────────────────

/// Three-level operator hierarchy.
///
/// - `SuperAdmin`    – everything below, plus promoting and demoting admins.
/// - `ContractAdmin` – economic parameters: the base rate and reward funding.
/// - `OperatorAdmin` – emergency pause and unpause only.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum AdminTier {
    OperatorAdmin = 1,
    ContractAdmin = 2,
    SuperAdmin = 3,
}

impl AdminTier {
    pub fn rank(&self) -> u32 {
        match self {
            AdminTier::OperatorAdmin => 1,
            AdminTier::ContractAdmin => 2,
            AdminTier::SuperAdmin => 3,
        }
    }

    /// Returns true if this tier is at least as high as `min_tier`.
    pub fn has_at_least(&self, min_tier: &AdminTier) -> bool {
        self.rank() >= min_tier.rank()
    }
}

fn tier_key(admin: &Address) -> (Symbol, Address) {
    (ADMIN_TIER_PREFIX, admin.clone())
}

// ── Core Functions ───────────────────────────────────────────────────────────

/// Assigns `tier` to `admin` without any authorization check.
pub fn set_admin_tier(env: &Env, admin: &Address, tier: &AdminTier) {
    let key = tier_key(admin);
    env.storage().persistent().set(&key, tier);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn get_admin_tier(env: &Env, admin: &Address) -> Option<AdminTier> {
    let key = tier_key(admin);
    let tier: Option<AdminTier> = env.storage().persistent().get(&key);
    if tier.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
    tier
}

/// Returns `false` if `caller` holds no tier or one below `min_tier`.
pub fn require_tier(env: &Env, caller: &Address, min_tier: &AdminTier) -> bool {
    get_admin_tier(env, caller).is_some_and(|tier| tier.has_at_least(min_tier))
}

/// Records the deploying admin and grants them `SuperAdmin`.
pub fn bootstrap_super_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&SUPER_ADMIN, admin);
    set_admin_tier(env, admin, &AdminTier::SuperAdmin);
}

/// The address passed to [`bootstrap_super_admin`], if any.
pub fn get_super_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&SUPER_ADMIN)
}

// ── Promote / Demote ─────────────────────────────────────────────────────────

/// Assigns `tier` to `target` on behalf of `caller`.
///
/// The caller must already be authenticated. Returns `false` without writing
/// anything unless the caller is a `SuperAdmin`.
pub fn promote_admin(env: &Env, caller: &Address, target: &Address, tier: &AdminTier) -> bool {
    if !require_tier(env, caller, &AdminTier::SuperAdmin) {
        return false;
    }
    set_admin_tier(env, target, tier);
    true
}

/// Removes any tier held by `target` on behalf of `caller`.
///
/// The bootstrapped super admin cannot be demoted, so the ledger always
/// keeps at least one identity able to promote.
pub fn demote_admin(env: &Env, caller: &Address, target: &Address) -> bool {
    if !require_tier(env, caller, &AdminTier::SuperAdmin) {
        return false;
    }
    if get_super_admin(env).as_ref() == Some(target) {
        return false;
    }
    env.storage().persistent().remove(&tier_key(target));
    true
}
