use inner::doc_inline_reexport;

doc_inline_reexport! {
    bucket_key,
    bucket_sort,
    count_sort,
    cumsum,
    inplace_bucket_sort,
    key_count,
    permutation,
}
