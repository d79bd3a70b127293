use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use jz_scanner::{tokenize, Scanner};

// Scanner-friendly ECMAScript: no comments, numbers or template literals.
const ECMASCRIPT_SOURCE: &str = r#"
class UserService {
    #users;
    #nextId;

    constructor(store) {
        this.#users = store ?? new Map();
        this.#nextId = store.size;
    }

    async createUser(name, email) {
        const user = {
            id: this.#nextId++,
            name,
            email,
            preferences: { theme: 'light', notifications: true, language: "en" },
        };
        await this.#users.set(user.id, user);
        return user;
    }

    getUserById(id) {
        return this.#users.get(id) ?? undefined;
    }

    updateUser(id, updates) {
        const user = this.#users.get(id);
        if (!user) return false;
        this.#users.set(id, { ...user, ...updates });
        return true;
    }

    static describe(user) {
        return 'User \u{1F464} ' + user.name + " <" + user.email + ">\n";
    }
}

function filterUsers(users, predicate) {
    return users.filter((user) => predicate(user) && !user.disabled);
}

let flags = mask;
flags >>>= shift;
flags |= other & ~hidden;
flags ||= fallback;
const café = "caf\xE9 été \'quoted\' \"double\"";
export default UserService;
"#;

fn bench_scan_ecmascript(c: &mut Criterion) {
    // The timed loop must cover the whole source, not a prefix ending in an error.
    if let Err(err) = tokenize(ECMASCRIPT_SOURCE.as_bytes()) {
        panic!("benchmark source does not scan: {}", err);
    }

    let mut group = c.benchmark_group("scan");
    group.throughput(Throughput::Bytes(ECMASCRIPT_SOURCE.len() as u64));
    group.bench_function("scan_ecmascript_medium", |b| {
        b.iter(|| {
            let mut scanner = Scanner::from(black_box(ECMASCRIPT_SOURCE));
            let mut count = 0usize;
            for token in scanner.tokens() {
                black_box(token);
                count += 1;
            }
            black_box(count);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_scan_ecmascript);
criterion_main!(benches);
