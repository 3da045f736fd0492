use sorted_multimap::SortedMultiMap;

type Key = char;
type Value = i32;

fn main() {
    // Routing table fixed at startup: one key may map to several values
    let routes: SortedMultiMap<Key, Value, 7> = SortedMultiMap::from_entries([
        ('b', 0),
        ('a', -1),
        ('b', 1),
        ('c', -1),
        ('b', 2),
        ('d', -1),
        ('b', 3),
    ]);

    println!("entries: {:?}", routes);
    println!("len: {}", routes.len());

    for key in ['a', 'b', 'g'] {
        println!("get({key:?}) = {:?}", routes.get(&key));
        println!("contains_key({key:?}) = {}", routes.contains_key(&key));
        println!("lower_bound({key:?}) = {:?}", routes.lower_bound(&key));
        println!("upper_bound({key:?}) = {:?}", routes.upper_bound(&key));
        println!("count({key:?}) = {}", routes.count(&key));

        let values: Vec<Value> = routes.equal_range(&key).copied().collect();
        println!("equal_range({key:?}) = {values:?}");
    }
}
